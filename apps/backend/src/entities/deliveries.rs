use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ExtraType {
    #[sea_orm(string_value = "WIDE")]
    Wide,
    #[sea_orm(string_value = "NO_BALL")]
    NoBall,
    #[sea_orm(string_value = "BYE")]
    Bye,
    #[sea_orm(string_value = "LEG_BYE")]
    LegBye,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Dismissal {
    #[sea_orm(string_value = "BOWLED")]
    Bowled,
    #[sea_orm(string_value = "CAUGHT")]
    Caught,
    #[sea_orm(string_value = "LBW")]
    Lbw,
    #[sea_orm(string_value = "STUMPED")]
    Stumped,
    #[sea_orm(string_value = "RUN_OUT")]
    RunOut,
    #[sea_orm(string_value = "HIT_WICKET")]
    HitWicket,
    #[sea_orm(string_value = "HIT_THE_BALL_TWICE")]
    HitTheBallTwice,
    #[sea_orm(string_value = "RETIRED_HURT")]
    RetiredHurt,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RunOutEnd {
    #[sea_orm(string_value = "STRIKER")]
    Striker,
    #[sea_orm(string_value = "NON_STRIKER")]
    NonStriker,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deliveries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "match_id")]
    pub match_id: i64,
    #[sea_orm(column_type = "SmallInteger")]
    pub innings: i16,
    #[sea_orm(column_name = "over_no")]
    pub over_no: i32,
    #[sea_orm(column_name = "ball_no", column_type = "SmallInteger")]
    pub ball_no: i16,
    pub sequence: i64,
    #[sea_orm(column_name = "batting_team_id")]
    pub batting_team_id: String,
    #[sea_orm(column_name = "striker_id")]
    pub striker_id: String,
    #[sea_orm(column_name = "non_striker_id")]
    pub non_striker_id: String,
    #[sea_orm(column_name = "bowler_id")]
    pub bowler_id: String,
    pub runs: i32,
    #[sea_orm(column_name = "running_runs")]
    pub running_runs: i32,
    #[sea_orm(column_name = "extra_type")]
    pub extra_type: Option<ExtraType>,
    #[sea_orm(column_name = "extra_runs")]
    pub extra_runs: i32,
    pub legal: bool,
    #[sea_orm(column_name = "free_hit")]
    pub free_hit: bool,
    #[sea_orm(column_name = "over_completed")]
    pub over_completed: bool,
    pub wicket: bool,
    pub dismissal: Option<Dismissal>,
    #[sea_orm(column_name = "out_batter_id")]
    pub out_batter_id: Option<String>,
    #[sea_orm(column_name = "new_batter_id")]
    pub new_batter_id: Option<String>,
    #[sea_orm(column_name = "run_out_end")]
    pub run_out_end: Option<RunOutEnd>,
    #[sea_orm(column_name = "fielder_id")]
    pub fielder_id: Option<String>,
    pub boundary: bool,
    #[sea_orm(column_name = "boundary_runs")]
    pub boundary_runs: i32,
    pub overthrow: bool,
    #[sea_orm(column_name = "team_runs_at_ball")]
    pub team_runs_at_ball: i32,
    #[sea_orm(column_name = "team_wickets_at_ball")]
    pub team_wickets_at_ball: i32,
    #[sea_orm(column_name = "overs_at_ball")]
    pub overs_at_ball: f64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_states::Entity",
        from = "Column::MatchId",
        to = "super::match_states::Column::MatchId"
    )]
    MatchState,
}

impl Related<super::match_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchState.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
