use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_player_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "match_id")]
    pub match_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: String,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    #[sea_orm(column_name = "strike_rate")]
    pub strike_rate: f64,
    pub out: bool,
    pub dismissal: Option<super::deliveries::Dismissal>,
    #[sea_orm(column_name = "dismissed_by")]
    pub dismissed_by: Option<String>,
    #[sea_orm(column_name = "fielder_id")]
    pub fielder_id: Option<String>,
    #[sea_orm(column_name = "balls_bowled")]
    pub balls_bowled: i32,
    pub overs: f64,
    #[sea_orm(column_name = "runs_conceded")]
    pub runs_conceded: i32,
    pub wickets: i32,
    pub wides: i32,
    #[sea_orm(column_name = "no_balls")]
    pub no_balls: i32,
    pub economy: f64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
