use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----

#[derive(Iden)]
enum MatchStates {
    Table,
    Id,
    MatchId,
    TeamAId,
    TeamARuns,
    TeamAWickets,
    TeamAOvers,
    TeamAExtras,
    TeamAPlayingXi,
    TeamAYetToBat,
    TeamAOutBatters,
    TeamBId,
    TeamBRuns,
    TeamBWickets,
    TeamBOvers,
    TeamBExtras,
    TeamBPlayingXi,
    TeamBYetToBat,
    TeamBOutBatters,
    TossWinner,
    TossDecision,
    Status,
    Innings,
    BattingTeamId,
    StrikerId,
    NonStrikerId,
    CurrentBowlerId,
    LastOverBowlerId,
    TotalOvers,
    FirstInningsCompleted,
    SecondInningsCompleted,
    Winner,
    Result,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Deliveries {
    Table,
    Id,
    MatchId,
    Innings,
    OverNo,
    BallNo,
    Sequence,
    BattingTeamId,
    StrikerId,
    NonStrikerId,
    BowlerId,
    Runs,
    RunningRuns,
    ExtraType,
    ExtraRuns,
    Legal,
    FreeHit,
    OverCompleted,
    Wicket,
    Dismissal,
    OutBatterId,
    NewBatterId,
    RunOutEnd,
    FielderId,
    Boundary,
    BoundaryRuns,
    Overthrow,
    TeamRunsAtBall,
    TeamWicketsAtBall,
    OversAtBall,
    CreatedAt,
}

#[derive(Iden)]
enum MatchPlayerStats {
    Table,
    Id,
    MatchId,
    PlayerId,
    Runs,
    Balls,
    Fours,
    Sixes,
    StrikeRate,
    Out,
    Dismissal,
    DismissedBy,
    FielderId,
    BallsBowled,
    Overs,
    RunsConceded,
    Wickets,
    Wides,
    NoBalls,
    Economy,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enum-valued columns are stored as strings so the same schema runs
        // on Postgres and on the sqlite databases used by integration tests.
        manager
            .create_table(
                Table::create()
                    .table(MatchStates::Table)
                    .col(
                        ColumnDef::new(MatchStates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MatchStates::MatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchStates::TeamAId).string().not_null())
                    .col(
                        ColumnDef::new(MatchStates::TeamARuns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamAWickets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamAOvers)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamAExtras)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamAPlayingXi)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamAYetToBat)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamAOutBatters)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchStates::TeamBId).string().not_null())
                    .col(
                        ColumnDef::new(MatchStates::TeamBRuns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamBWickets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamBOvers)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamBExtras)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamBPlayingXi)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamBYetToBat)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStates::TeamBOutBatters)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchStates::TossWinner).string().not_null())
                    .col(
                        ColumnDef::new(MatchStates::TossDecision)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchStates::Status).string().not_null())
                    .col(
                        ColumnDef::new(MatchStates::Innings)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(MatchStates::BattingTeamId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchStates::StrikerId).string().null())
                    .col(ColumnDef::new(MatchStates::NonStrikerId).string().null())
                    .col(ColumnDef::new(MatchStates::CurrentBowlerId).string().null())
                    .col(
                        ColumnDef::new(MatchStates::LastOverBowlerId)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(MatchStates::TotalOvers).integer().not_null())
                    .col(
                        ColumnDef::new(MatchStates::FirstInningsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MatchStates::SecondInningsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(MatchStates::Winner).string().null())
                    .col(ColumnDef::new(MatchStates::Result).string().null())
                    .col(
                        ColumnDef::new(MatchStates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_states_match_id")
                    .table(MatchStates::Table)
                    .col(MatchStates::MatchId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Deliveries::Table)
                    .col(
                        ColumnDef::new(Deliveries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Deliveries::MatchId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Deliveries::Innings)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deliveries::OverNo).integer().not_null())
                    .col(ColumnDef::new(Deliveries::BallNo).small_integer().not_null())
                    .col(
                        ColumnDef::new(Deliveries::Sequence)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deliveries::BattingTeamId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deliveries::StrikerId).string().not_null())
                    .col(ColumnDef::new(Deliveries::NonStrikerId).string().not_null())
                    .col(ColumnDef::new(Deliveries::BowlerId).string().not_null())
                    .col(
                        ColumnDef::new(Deliveries::Runs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Deliveries::RunningRuns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Deliveries::ExtraType).string().null())
                    .col(
                        ColumnDef::new(Deliveries::ExtraRuns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Deliveries::Legal).boolean().not_null())
                    .col(
                        ColumnDef::new(Deliveries::FreeHit)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Deliveries::OverCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Deliveries::Wicket)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Deliveries::Dismissal).string().null())
                    .col(ColumnDef::new(Deliveries::OutBatterId).string().null())
                    .col(ColumnDef::new(Deliveries::NewBatterId).string().null())
                    .col(ColumnDef::new(Deliveries::RunOutEnd).string().null())
                    .col(ColumnDef::new(Deliveries::FielderId).string().null())
                    .col(
                        ColumnDef::new(Deliveries::Boundary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Deliveries::BoundaryRuns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Deliveries::Overthrow)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Deliveries::TeamRunsAtBall)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deliveries::TeamWicketsAtBall)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deliveries::OversAtBall).double().not_null())
                    .col(
                        ColumnDef::new(Deliveries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deliveries_match_states")
                            .from(Deliveries::Table, Deliveries::MatchId)
                            .to(MatchStates::Table, MatchStates::MatchId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_deliveries_match_innings_sequence")
                    .table(Deliveries::Table)
                    .col(Deliveries::MatchId)
                    .col(Deliveries::Innings)
                    .col(Deliveries::Sequence)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_deliveries_match_over_ball")
                    .table(Deliveries::Table)
                    .col(Deliveries::MatchId)
                    .col(Deliveries::OverNo)
                    .col(Deliveries::BallNo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchPlayerStats::Table)
                    .col(
                        ColumnDef::new(MatchPlayerStats::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::MatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::PlayerId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Runs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Balls)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Fours)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Sixes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::StrikeRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Out)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(MatchPlayerStats::Dismissal).string().null())
                    .col(
                        ColumnDef::new(MatchPlayerStats::DismissedBy)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(MatchPlayerStats::FielderId).string().null())
                    .col(
                        ColumnDef::new(MatchPlayerStats::BallsBowled)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Overs)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::RunsConceded)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Wickets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Wides)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::NoBalls)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::Economy)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchPlayerStats::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_player_stats_match_player")
                    .table(MatchPlayerStats::Table)
                    .col(MatchPlayerStats::MatchId)
                    .col(MatchPlayerStats::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchPlayerStats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Deliveries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchStates::Table).to_owned())
            .await?;
        Ok(())
    }
}
