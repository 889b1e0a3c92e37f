//! Game state management implementation.

use log::{debug, info};

use crate::config::GameConfig;
use crate::engine::audio::SoundEffect;
use crate::engine::input::{Action, GameLogic};
use crate::game::player::Player;
use crate::game::world::level::{GridPos, Level, LevelError, Tile};
use crate::game::world::levels;

/// Points per collected star.
pub const STAR_SCORE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Dead,
    Complete,
}

#[derive(Clone)]
pub struct GameState {
    config: GameConfig,
    phase: Phase,
    level_index: usize,
    /// Level as loaded, before any stars were taken.
    fresh_level: Level,
    level: Level,
    player: Player,
    score: u32,
    level_start_score: u32,
    /// Seconds until touches are accepted again.
    input_delay: f32,
    sounds: Vec<SoundEffect>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, LevelError> {
        Ok(Self::with_level(config, levels::load(0)?))
    }

    /// Start on a specific level; progression continues with the built-in ones.
    pub fn with_level(config: GameConfig, level: Level) -> Self {
        let player = Player::new(level.start());
        Self {
            config,
            phase: Phase::Menu,
            level_index: 0,
            fresh_level: level.clone(),
            level,
            player,
            score: 0,
            level_start_score: 0,
            input_delay: 0.0,
            sounds: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Sound effects queued since the last call.
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    /// Advance the slide in progress.
    pub fn update(&mut self, delta_time: f32) {
        self.player.animate(delta_time);
        if self.phase != Phase::Playing || self.config.step_interval <= 0.0 {
            return;
        }

        let Some(mut slide) = self.player.slide else {
            return;
        };
        slide.progress += delta_time / self.config.step_interval;
        self.player.slide = Some(slide);

        while let Some(s) = self.player.slide {
            if s.progress < 1.0 {
                break;
            }
            let leftover = s.progress - 1.0;
            self.arrive(s.step);
            if let Some(next) = self.player.slide.as_mut() {
                next.progress = leftover;
            }
        }
    }

    /// Count down the post-death and level-complete input delay.
    pub fn update_timers(&mut self, delta_time: f32) {
        if self.input_delay > 0.0 {
            self.input_delay = (self.input_delay - delta_time).max(0.0);
        }
    }

    pub fn start(&mut self) {
        info!("Starting level {}", self.level_index + 1);
        self.phase = Phase::Playing;
    }

    pub fn restart_level(&mut self) {
        self.level = self.fresh_level.clone();
        self.score = self.level_start_score;
        self.player = Player::new(self.level.start());
        self.start();
    }

    pub fn next_level(&mut self) {
        let next = (self.level_index + 1) % levels::count();
        match levels::load(next) {
            Ok(level) => {
                self.level_index = next;
                self.fresh_level = level;
            }
            Err(e) => debug!("Replaying level, next failed to load: {}", e),
        }
        self.level = self.fresh_level.clone();
        self.level_start_score = self.score;
        self.player = Player::new(self.level.start());
        self.start();
    }

    fn neighbour(&self, step: GridPos) -> GridPos {
        (self.player.position.0 + step.0, self.player.position.1 + step.1)
    }

    fn try_move(&mut self, action: Action) {
        let Some(step) = action.grid_offset() else {
            return;
        };
        if !self.allows(action) {
            debug!("Move {:?} blocked at {:?}", action, self.player.position);
            return;
        }
        debug!("Sliding {:?} from {:?}", action, self.player.position);
        self.player.start_slide(step);
    }

    /// Player reached the next tile of the slide.
    fn arrive(&mut self, step: GridPos) {
        let pos = self.neighbour(step);
        self.player.position = pos;

        if self.level.tile(pos) == Tile::Void {
            self.die();
            return;
        }

        self.sounds.push(SoundEffect::Step);
        if self.level.take_star(pos) {
            self.score += STAR_SCORE;
            self.sounds.push(SoundEffect::Score);
            debug!("Star at {:?}, {} left", pos, self.level.stars_left());
            if self.level.stars_left() == 0 {
                self.complete();
                return;
            }
        }

        if self.level.tile(self.neighbour(step)) == Tile::Wall {
            self.player.stop();
        }
    }

    fn die(&mut self) {
        info!("Player fell off at {:?}", self.player.position);
        self.player.stop();
        self.phase = Phase::Dead;
        self.input_delay = self.config.input_delay;
        self.sounds.push(SoundEffect::Die);
    }

    fn complete(&mut self) {
        info!("Level {} complete, score {}", self.level_index + 1, self.score);
        self.player.stop();
        self.phase = Phase::Complete;
        self.input_delay = self.config.input_delay;
    }
}

impl GameLogic for GameState {
    fn input(&mut self, action: Action) {
        match (self.phase, action) {
            (Phase::Menu, Action::Tap) => self.start(),
            (Phase::Playing, _) => self.try_move(action),
            (Phase::Dead, Action::Tap) => self.restart_level(),
            (Phase::Complete, Action::Tap) => self.next_level(),
            _ => {}
        }
    }

    fn is_alive(&self) -> bool {
        self.phase == Phase::Playing
    }

    fn is_stopped(&self) -> bool {
        !self.player.is_sliding()
    }

    fn accepts_input(&self) -> bool {
        self.input_delay <= 0.0
    }

    fn allows(&self, action: Action) -> bool {
        match action.grid_offset() {
            None => true,
            Some(step) => {
                self.phase == Phase::Playing
                    && !self.player.is_sliding()
                    && self.level.tile(self.neighbour(step)) != Tile::Wall
            }
        }
    }
}
