use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::coach::Coach;
use crate::domain::footballer::Footballer;
use crate::domain::repositories::{CoachRepository, FootballerRepository, TeamRepository};
use crate::domain::team::{Team, TeamFootballer};

#[derive(Debug, Default)]
struct StoreState {
    next_id: i32,
    coaches: Vec<Coach>,
    /// Every stored footballer, keyed by id, with the owning coach id
    footballers: HashMap<i32, (Option<i32>, Footballer)>,
    /// Teams as stored; links hold only footballer ids
    teams: Vec<Team>,
}

impl StoreState {
    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn store_footballer(&mut self, coach_id: Option<i32>, footballer: &Footballer) -> Footballer {
        let id = self.allocate_id();
        let stored = Footballer::from_persistence(
            id,
            footballer.name().to_string(),
            footballer.contract_start_date(),
            footballer.contract_end_date(),
            footballer.best_skill_type(),
            footballer.position_type(),
        );
        self.footballers.insert(id, (coach_id, stored.clone()));
        stored
    }
}

/// In-memory implementation of the repository ports
///
/// Each bulk commit runs under one lock, so it is applied whole. Cloning
/// shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores footballers that belong to no coach and returns their ids
    ///
    /// Used to seed the footballers a team feed refers to.
    pub async fn seed_footballers(&self, footballers: Vec<Footballer>) -> Vec<i32> {
        let mut state = self.state.lock().await;
        footballers
            .iter()
            .filter_map(|footballer| state.store_footballer(None, footballer).id())
            .collect()
    }
}

#[async_trait]
impl CoachRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Coach>, String> {
        let state = self.state.lock().await;
        Ok(state.coaches.clone())
    }

    async fn save_all(&self, coaches: Vec<Coach>) -> Result<(), String> {
        let mut state = self.state.lock().await;

        for coach in coaches {
            let coach_id = state.allocate_id();
            let footballers = coach
                .footballers()
                .iter()
                .map(|footballer| state.store_footballer(Some(coach_id), footballer))
                .collect();

            state.coaches.push(Coach::from_persistence(
                coach_id,
                coach.name().to_string(),
                coach.nationality().to_string(),
                footballers,
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl TeamRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let state = self.state.lock().await;

        Ok(state
            .teams
            .iter()
            .map(|team| {
                let links = team
                    .footballers()
                    .iter()
                    .filter_map(|link| {
                        state.footballers.get(&link.footballer_id()).map(|(_, f)| {
                            TeamFootballer::from_persistence(link.footballer_id(), f.clone())
                        })
                    })
                    .collect();

                Team::from_persistence(
                    team.id().unwrap_or_default(),
                    team.name().to_string(),
                    team.nationality().to_string(),
                    team.trophies(),
                    links,
                )
            })
            .collect())
    }

    async fn save_all(&self, teams: Vec<Team>) -> Result<(), String> {
        let mut state = self.state.lock().await;

        if let Some(missing) = teams
            .iter()
            .flat_map(|team| team.footballers())
            .map(TeamFootballer::footballer_id)
            .find(|id| !state.footballers.contains_key(id))
        {
            return Err(format!("Failed to save teams: footballer {} not found", missing));
        }

        for team in teams {
            let team_id = state.allocate_id();
            state.teams.push(Team::from_persistence(
                team_id,
                team.name().to_string(),
                team.nationality().to_string(),
                team.trophies(),
                team.footballers().to_vec(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl FootballerRepository for InMemoryRepository {
    async fn exists(&self, id: i32) -> Result<bool, String> {
        let state = self.state.lock().await;
        Ok(state.footballers.contains_key(&id))
    }

    async fn find_all(&self) -> Result<Vec<Footballer>, String> {
        let state = self.state.lock().await;
        let mut footballers: Vec<Footballer> =
            state.footballers.values().map(|(_, f)| f.clone()).collect();
        footballers.sort_by_key(|f| f.id());
        Ok(footballers)
    }
}
