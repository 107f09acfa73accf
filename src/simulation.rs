use crate::{Cell, Config, Grid, KeyScheme, LifeError, RlePattern, Rule};
use rand::Rng;

/// Whether the host should keep calling [`Simulation::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Paused,
    Playing,
}

/// Drives a [`Grid`] one generation at a time.
///
/// The driver owns no timer: while it is [`PlayState::Playing`] the host
/// (frame callback, game loop, ...) decides how often to call `tick`, and
/// `pause` takes effect on its next iteration.
///
/// Edits made through the driver and ticks set a render-due flag that the
/// host consumes with [`Simulation::take_render_due`].
pub struct Simulation<K: KeyScheme> {
    grid: Grid<K>,
    rule: Rule,
    ticks: u64,
    state: PlayState,
    render_due: bool,
}

impl<K: KeyScheme> Simulation<K> {
    pub fn new(rule: Rule) -> Self {
        Self {
            grid: Grid::new(),
            rule,
            ticks: 0,
            state: PlayState::Paused,
            render_due: true,
        }
    }

    /// Creates a session filled with random cells according to `config`.
    pub fn from_config(config: &Config) -> Result<Self, LifeError> {
        let mut simulation = Self::new(config.rule);
        simulation
            .grid
            .randomize_seeded(config.field_size, config.density, config.seed)?;
        Ok(simulation)
    }

    pub fn grid(&self) -> &Grid<K> {
        &self.grid
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Takes effect from the next tick.
    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }

    /// Generations computed since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Advances the grid by one generation. Works in both states.
    pub fn tick(&mut self) {
        self.ticks += 1;
        self.grid.advance_generation(&self.rule);
        self.render_due = true;
    }

    pub fn play(&mut self) {
        self.state = PlayState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = PlayState::Paused;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlayState::Paused => PlayState::Playing,
            PlayState::Playing => PlayState::Paused,
        };
    }

    /// Returns `true` once after every change of the live cells, and before
    /// the first tick.
    pub fn take_render_due(&mut self) -> bool {
        std::mem::take(&mut self.render_due)
    }

    pub fn spawn(&mut self, cell: Cell) -> Result<(), LifeError> {
        self.grid.spawn(cell)?;
        self.render_due = true;
        Ok(())
    }

    pub fn kill(&mut self, cell: Cell) -> Result<(), LifeError> {
        self.grid.kill(cell)?;
        self.render_due = true;
        Ok(())
    }

    pub fn set_cell(&mut self, cell: Cell, state: bool) -> Result<(), LifeError> {
        self.grid.set_cell(cell, state)?;
        self.render_due = true;
        Ok(())
    }

    /// Starts a new session: ticks go back to 0 and the driver pauses.
    fn restart(&mut self) {
        self.ticks = 0;
        self.state = PlayState::Paused;
        self.render_due = true;
    }

    /// Kills every cell and starts a new session.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.restart();
    }

    /// See [`Grid::randomize`]. Starts a new session on success.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        field_size: u32,
        density: f64,
        rng: &mut R,
    ) -> Result<(), LifeError> {
        self.grid.randomize(field_size, density, rng)?;
        self.restart();
        Ok(())
    }

    /// See [`Grid::randomize_seeded`]. Starts a new session on success.
    pub fn randomize_seeded(
        &mut self,
        field_size: u32,
        density: f64,
        seed: Option<u64>,
    ) -> Result<(), LifeError> {
        self.grid.randomize_seeded(field_size, density, seed)?;
        self.restart();
        Ok(())
    }

    /// Replaces the grid with `pattern` centered on the origin and adopts its
    /// rule, if it has one. Starts a new session on success.
    pub fn load_pattern(&mut self, pattern: &RlePattern) -> Result<(), LifeError> {
        let (dx, dy) = ((pattern.width / 2) as i64, (pattern.height / 2) as i64);
        self.grid.load_cells(
            pattern
                .cells
                .iter()
                .map(|c| Cell::new(c.x.saturating_sub(dx), c.y.saturating_sub(dy))),
        )?;
        if let Some(rule) = pattern.rule {
            self.rule = rule;
        }
        self.restart();
        Ok(())
    }

    /// Returns multiline string reporting session stats.
    pub fn statistics(&self) -> String {
        let mut s = format!("Generation: {}\n", self.ticks);
        s += &format!("State: {:?}\n", self.state);
        s += &format!("Rule: {}\n", self.rule);
        s += &self.grid.statistics();
        s
    }
}
