//! Team Endpoints
//!
//! Team creation and membership are lead-scoped; the backend infers the
//! lead from the token.

use serde::Serialize;

use crate::error::AppResult;
use crate::models::{Team, TeamMember};

use super::{get_json, post_json, post_unit};

#[derive(Serialize)]
struct CreateTeamArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddMemberArgs {
    user_id: i64,
}

pub async fn create_team(name: &str, token: &str) -> AppResult<Team> {
    post_json("/teams", &CreateTeamArgs { name }, token).await
}

/// The team owned by the authenticated lead
pub async fn get_my_team(token: &str) -> AppResult<Team> {
    get_json("/teams/mine", token).await
}

pub async fn list_my_team_members(token: &str) -> AppResult<Vec<TeamMember>> {
    get_json("/teams/mine/members", token).await
}

pub async fn add_team_member(team_id: i64, user_id: i64, token: &str) -> AppResult<()> {
    post_unit(
        &format!("/teams/{}/members", team_id),
        &AddMemberArgs { user_id },
        token,
    )
    .await
}
