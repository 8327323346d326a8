use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TossDecision {
    #[sea_orm(string_value = "BAT")]
    Bat,
    #[sea_orm(string_value = "BOWL")]
    Bowl,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MatchStatus {
    #[sea_orm(string_value = "NOT_STARTED")]
    NotStarted,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_states")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "match_id")]
    pub match_id: i64,
    #[sea_orm(column_name = "team_a_id")]
    pub team_a_id: String,
    #[sea_orm(column_name = "team_a_runs")]
    pub team_a_runs: i32,
    #[sea_orm(column_name = "team_a_wickets")]
    pub team_a_wickets: i32,
    #[sea_orm(column_name = "team_a_overs")]
    pub team_a_overs: f64,
    #[sea_orm(column_name = "team_a_extras")]
    pub team_a_extras: i32,
    #[sea_orm(column_name = "team_a_playing_xi")]
    pub team_a_playing_xi: Json,
    #[sea_orm(column_name = "team_a_yet_to_bat")]
    pub team_a_yet_to_bat: Json,
    #[sea_orm(column_name = "team_a_out_batters")]
    pub team_a_out_batters: Json,
    #[sea_orm(column_name = "team_b_id")]
    pub team_b_id: String,
    #[sea_orm(column_name = "team_b_runs")]
    pub team_b_runs: i32,
    #[sea_orm(column_name = "team_b_wickets")]
    pub team_b_wickets: i32,
    #[sea_orm(column_name = "team_b_overs")]
    pub team_b_overs: f64,
    #[sea_orm(column_name = "team_b_extras")]
    pub team_b_extras: i32,
    #[sea_orm(column_name = "team_b_playing_xi")]
    pub team_b_playing_xi: Json,
    #[sea_orm(column_name = "team_b_yet_to_bat")]
    pub team_b_yet_to_bat: Json,
    #[sea_orm(column_name = "team_b_out_batters")]
    pub team_b_out_batters: Json,
    #[sea_orm(column_name = "toss_winner")]
    pub toss_winner: String,
    #[sea_orm(column_name = "toss_decision")]
    pub toss_decision: TossDecision,
    pub status: MatchStatus,
    #[sea_orm(column_type = "SmallInteger")]
    pub innings: i16,
    #[sea_orm(column_name = "batting_team_id")]
    pub batting_team_id: String,
    #[sea_orm(column_name = "striker_id")]
    pub striker_id: Option<String>,
    #[sea_orm(column_name = "non_striker_id")]
    pub non_striker_id: Option<String>,
    #[sea_orm(column_name = "current_bowler_id")]
    pub current_bowler_id: Option<String>,
    #[sea_orm(column_name = "last_over_bowler_id")]
    pub last_over_bowler_id: Option<String>,
    #[sea_orm(column_name = "total_overs")]
    pub total_overs: i32,
    #[sea_orm(column_name = "first_innings_completed")]
    pub first_innings_completed: bool,
    #[sea_orm(column_name = "second_innings_completed")]
    pub second_innings_completed: bool,
    pub winner: Option<String>,
    pub result: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::deliveries::Entity")]
    Deliveries,
}

impl Related<super::deliveries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliveries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
