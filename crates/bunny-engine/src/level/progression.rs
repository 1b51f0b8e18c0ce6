use serde::Serialize;

use crate::api::config::{GameConfig, ResultsPolicy};
use crate::api::error::LevelError;
use crate::api::types::GameEvent;
use crate::input::controls::InputSnapshot;
use crate::level::descriptor::LevelCatalog;
use crate::level::world::LevelState;

/// Campaign state machine phases.
///
/// `LevelSelect -> Playing -> LevelComplete -> (Playing | CampaignComplete) -> LevelSelect`.
/// Hazard resets stay inside `Playing`. Both completion screens wait for an
/// explicit acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    LevelSelect,
    Playing,
    LevelComplete,
    CampaignComplete,
}

/// One finished level, as shown on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelResult {
    /// One-based level number.
    pub level_number: usize,
    pub elapsed_seconds: f32,
    pub collected: u32,
    pub total_pickups: usize,
}

/// Values a HUD shows every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub phase: Phase,
    pub level_number: Option<usize>,
    pub elapsed_seconds: f32,
    pub collected: u32,
    pub total_pickups: usize,
}

/// Level progression over an ordered catalog, with accumulated results.
pub struct Campaign {
    catalog: LevelCatalog,
    config: GameConfig,
    phase: Phase,
    level: Option<LevelState>,
    results: Vec<LevelResult>,
    pending: Vec<GameEvent>,
    confirm_was_held: bool,
}

impl Campaign {
    pub fn new(catalog: LevelCatalog, config: GameConfig) -> Self {
        Self {
            catalog,
            config,
            phase: Phase::LevelSelect,
            level: None,
            results: Vec::new(),
            pending: Vec::new(),
            confirm_was_held: false,
        }
    }

    /// Start a campaign at `index` from the selection screen.
    pub fn select_level(&mut self, index: usize) -> Result<(), LevelError> {
        if self.phase != Phase::LevelSelect {
            log::warn!("select_level({}) ignored in {:?}", index, self.phase);
            return Err(LevelError::WrongPhase(self.phase));
        }
        self.catalog.get(index)?;
        if self.config.results_policy == ResultsPolicy::ClearOnNewCampaign {
            self.results.clear();
        }
        self.enter_level(index)
    }

    /// Reload the current level from scratch.
    pub fn restart_level(&mut self) -> Result<(), LevelError> {
        let index = match (&self.level, self.phase) {
            (Some(level), Phase::Playing) => level.index(),
            _ => return Err(LevelError::WrongPhase(self.phase)),
        };
        self.enter_level(index)
    }

    /// Leave whatever is going on and go back to level selection.
    /// Recorded results are kept.
    pub fn return_to_select(&mut self) {
        if self.phase != Phase::LevelSelect {
            log::info!("campaign: back to level select from {:?}", self.phase);
        }
        self.level = None;
        self.phase = Phase::LevelSelect;
    }

    /// Dismiss the current confirmation screen.
    pub fn acknowledge(&mut self) -> Result<(), LevelError> {
        match self.phase {
            Phase::LevelComplete => self.advance(),
            Phase::CampaignComplete => {
                self.return_to_select();
                Ok(())
            }
            phase => Err(LevelError::WrongPhase(phase)),
        }
    }

    /// Run one fixed tick. Returns the events produced since the last tick.
    pub fn tick(&mut self, input: &InputSnapshot) -> Vec<GameEvent> {
        let confirm_pressed = input.confirm && !self.confirm_was_held;
        self.confirm_was_held = input.confirm;

        match self.phase {
            Phase::Playing => self.play_tick(input),
            Phase::LevelComplete | Phase::CampaignComplete if confirm_pressed => {
                if let Err(e) = self.acknowledge() {
                    log::warn!("confirm ignored: {}", e);
                }
            }
            _ => {}
        }

        std::mem::take(&mut self.pending)
    }

    fn play_tick(&mut self, input: &InputSnapshot) {
        let Some(level) = self.level.as_mut() else {
            return;
        };
        if !level.step(input, &self.config, &mut self.pending) {
            return;
        }

        let result = LevelResult {
            level_number: level.level_number(),
            elapsed_seconds: level.elapsed_seconds(self.config.fixed_dt),
            collected: level.pickups().collected_count(),
            total_pickups: level.pickups().total(),
        };
        log::info!(
            "level {} complete in {:.2}s with {}/{} pickups",
            result.level_number,
            result.elapsed_seconds,
            result.collected,
            result.total_pickups
        );
        self.results.push(result);
        self.pending.push(GameEvent::LevelComplete(result));
        self.phase = Phase::LevelComplete;
    }

    fn advance(&mut self) -> Result<(), LevelError> {
        let next = self.level.as_ref().map_or(0, |l| l.index() + 1);
        if next < self.catalog.len() {
            return self.enter_level(next);
        }
        log::info!("campaign complete: {} levels recorded", self.results.len());
        self.pending.push(GameEvent::CampaignComplete {
            levels: self.results.len(),
        });
        self.phase = Phase::CampaignComplete;
        Ok(())
    }

    fn enter_level(&mut self, index: usize) -> Result<(), LevelError> {
        let descriptor = self.catalog.get(index)?;
        log::info!("level {} ({}) started", index + 1, descriptor.name);
        self.level = Some(LevelState::load(index, descriptor, &self.config));
        self.phase = Phase::Playing;
        self.pending.push(GameEvent::LevelStarted { index });
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> Option<&LevelState> {
        self.level.as_ref()
    }

    pub fn level_mut(&mut self) -> Option<&mut LevelState> {
        self.level.as_mut()
    }

    pub fn results(&self) -> &[LevelResult] {
        &self.results
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn hud(&self) -> Hud {
        match &self.level {
            Some(level) => Hud {
                phase: self.phase,
                level_number: Some(level.level_number()),
                elapsed_seconds: level.elapsed_seconds(self.config.fixed_dt),
                collected: level.pickups().collected_count(),
                total_pickups: level.pickups().total(),
            },
            None => Hud {
                phase: self.phase,
                level_number: None,
                elapsed_seconds: 0.0,
                collected: 0,
                total_pickups: 0,
            },
        }
    }
}
