//! In-memory stats provider shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use nba_xpt::{
    nba::{
        types::{ActivePlayer, CareerSeasonRow, GameLogRow, ShotSplitRow},
        ShotSplitQuery, StatsProvider,
    },
    GameDate, PlayerId, ProviderError, Season, SeasonType, TeamId,
};

pub const LEBRON: u64 = 2544;
pub const CURRY: u64 = 201939;
pub const LAKERS: u64 = 1610612747;
pub const WARRIORS: u64 = 1610612744;

pub const TIGHT: &str = "0-2 Feet - Very Tight";
pub const OPEN: &str = "6+ Feet - Wide Open";

pub fn split(
    bucket: &str,
    fg2a: Option<f64>,
    fg2_pct: Option<f64>,
    fg3a: Option<f64>,
    fg3_pct: Option<f64>,
) -> ShotSplitRow {
    ShotSplitRow {
        bucket: bucket.to_string(),
        fg2a,
        fg2_pct,
        fg3a,
        fg3_pct,
    }
}

pub fn game(id: &str, date: Option<&str>, fta: Option<f64>, ft_pct: Option<f64>) -> GameLogRow {
    GameLogRow {
        game_id: id.to_string(),
        game_date: date.map(|d| d.parse().unwrap()),
        matchup: None,
        fta,
        ft_pct,
    }
}

pub fn date(raw: &str) -> GameDate {
    raw.parse().unwrap()
}

fn career(season: &str, team: u64) -> CareerSeasonRow {
    CareerSeasonRow {
        season_id: season.to_string(),
        team_id: TeamId::new(team),
        team_abbreviation: None,
    }
}

type SplitKey = (PlayerId, SeasonType, Option<GameDate>);

/// Serves fixed tables and records every shot-split request it receives.
pub struct FakeProvider {
    pub players: Vec<ActivePlayer>,
    pub careers: Vec<(PlayerId, CareerSeasonRow)>,
    pub game_logs: Vec<((PlayerId, SeasonType), Vec<GameLogRow>)>,
    pub splits: Vec<(SplitKey, Vec<ShotSplitRow>)>,
    pub fail: bool,
    pub split_queries: Mutex<Vec<ShotSplitQuery>>,
}

impl FakeProvider {
    /// LeBron James has full 2023-24 data; Stephen Curry has a team but no
    /// shooting splits.
    ///
    /// Regular season: field goals 10 + 15 = 25, free throws 10 × 0.625.
    /// Playoffs: field goals 2 + 4.5 on baseline percentages, free throws 3.
    /// 2024-04-14: field goals 2 + 2.25, free throws 4 × 0.75.
    pub fn fixture() -> Self {
        let lebron = PlayerId::new(LEBRON);
        let curry = PlayerId::new(CURRY);
        Self {
            players: vec![
                ActivePlayer {
                    id: lebron,
                    full_name: "LeBron James".to_string(),
                },
                ActivePlayer {
                    id: curry,
                    full_name: "Stephen Curry".to_string(),
                },
            ],
            careers: vec![
                (lebron, career("2021-22", 0)),
                (lebron, career("2022-23", LAKERS)),
                (lebron, career("2023-24", 0)),
                (lebron, career("2023-24", LAKERS)),
                (curry, career("2023-24", WARRIORS)),
            ],
            game_logs: vec![
                (
                    (lebron, SeasonType::RegularSeason),
                    vec![
                        game("0022301195", Some("2024-04-14"), Some(4.0), Some(0.75)),
                        game("0022301180", Some("2024-04-12"), Some(6.0), Some(0.5)),
                        game("0022301170", None, None, None),
                    ],
                ),
                (
                    (lebron, SeasonType::Playoffs),
                    vec![game("0042300101", Some("2024-04-20"), Some(3.0), Some(1.0))],
                ),
                (
                    (curry, SeasonType::RegularSeason),
                    vec![game("0022301196", Some("2024-04-14"), Some(2.0), Some(1.0))],
                ),
            ],
            splits: vec![
                (
                    (lebron, SeasonType::RegularSeason, None),
                    vec![
                        split(TIGHT, Some(10.0), Some(0.5), Some(0.0), None),
                        split(OPEN, Some(4.0), Some(0.75), Some(8.0), Some(0.375)),
                    ],
                ),
                (
                    (lebron, SeasonType::Playoffs, None),
                    vec![
                        split(TIGHT, Some(2.0), Some(0.25), Some(0.0), None),
                        split(OPEN, Some(0.0), None, Some(4.0), Some(0.0)),
                    ],
                ),
                (
                    (lebron, SeasonType::RegularSeason, Some(date("2024-04-14"))),
                    vec![
                        split(TIGHT, Some(2.0), Some(1.0), Some(0.0), None),
                        split(OPEN, Some(0.0), None, Some(2.0), Some(0.5)),
                    ],
                ),
            ],
            fail: false,
            split_queries: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the provider were unreachable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::fixture()
        }
    }

    pub fn recorded_split_queries(&self) -> Vec<ShotSplitQuery> {
        self.split_queries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ProviderError> {
        if self.fail {
            return Err(ProviderError::MissingResultSet {
                name: "CommonAllPlayers".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn active_players(&self) -> Result<Vec<ActivePlayer>, ProviderError> {
        self.check()?;
        Ok(self.players.clone())
    }

    async fn career_seasons(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<CareerSeasonRow>, ProviderError> {
        self.check()?;
        Ok(self
            .careers
            .iter()
            .filter(|(id, _)| *id == player_id)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn game_log(
        &self,
        player_id: PlayerId,
        _season: &Season,
        season_type: SeasonType,
    ) -> Result<Vec<GameLogRow>, ProviderError> {
        self.check()?;
        Ok(self
            .game_logs
            .iter()
            .find(|(key, _)| *key == (player_id, season_type))
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default())
    }

    async fn closest_defender_shooting(
        &self,
        query: &ShotSplitQuery,
    ) -> Result<Vec<ShotSplitRow>, ProviderError> {
        self.check()?;
        self.split_queries.lock().unwrap().push(query.clone());
        let key = (query.player_id, query.season_type, query.game_date);
        Ok(self
            .splits
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default())
    }
}
