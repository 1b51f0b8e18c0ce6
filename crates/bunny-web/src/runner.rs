use bunny_engine::{
    build_render_buffer, builtin_catalog, Campaign, FixedTimestep, GameConfig, GameEvent,
    InputEvent, InputQueue, KeyBindings, LevelCatalog, LevelError, Phase, RenderBuffer, WireEvent,
};

/// Drives a [`Campaign`] from host frames.
///
/// The host pushes key events whenever they arrive and calls [`tick`](Self::tick)
/// once per animation frame with the elapsed wall time. The runner turns that
/// into whole fixed ticks, then leaves the render instances and the wire
/// events of the frame in flat buffers the host reads through raw pointers.
pub struct GameRunner {
    campaign: Campaign,
    input: InputQueue,
    bindings: KeyBindings,
    timestep: FixedTimestep,
    render_buffer: RenderBuffer,
    /// Events of the last frame, packed for shared-memory reads.
    events: Vec<WireEvent>,
}

impl GameRunner {
    pub fn new(catalog: LevelCatalog, config: GameConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        Self {
            campaign: Campaign::new(catalog, config),
            input: InputQueue::new(),
            bindings: KeyBindings::default(),
            timestep,
            render_buffer: RenderBuffer::new(),
            events: Vec::with_capacity(16),
        }
    }

    /// Replace config and catalog from JSON. Empty strings keep the defaults.
    /// Resets the campaign to level selection.
    pub fn configure(&mut self, config_json: &str, levels_json: &str) -> Result<(), LevelError> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json)?
        };
        let catalog = if levels_json.trim().is_empty() {
            builtin_catalog()
        } else {
            LevelCatalog::from_json(levels_json)?
        };
        log::info!("runner: {} levels, dt {}", catalog.len(), config.fixed_dt);
        *self = Self {
            bindings: std::mem::take(&mut self.bindings),
            ..Self::new(catalog, config)
        };
        Ok(())
    }

    pub fn set_bindings(&mut self, json: &str) -> Result<(), LevelError> {
        self.bindings = KeyBindings::from_json(json)?;
        Ok(())
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run as many fixed ticks as `dt` seconds cover and rebuild the frame
    /// buffers. Returns the number of ticks run.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.events.clear();
        self.input.apply_pending();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            let snapshot = self.input.sample(&self.bindings);
            let events = self.campaign.tick(&snapshot);
            self.events.extend(events.iter().map(GameEvent::to_wire));
        }

        self.rebuild_render_buffer();
        steps
    }

    pub fn select_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.campaign.select_level(index)?;
        self.timestep.reset();
        self.rebuild_render_buffer();
        Ok(())
    }

    pub fn restart_level(&mut self) -> Result<(), LevelError> {
        self.campaign.restart_level()?;
        self.rebuild_render_buffer();
        Ok(())
    }

    pub fn acknowledge(&mut self) -> Result<(), LevelError> {
        self.campaign.acknowledge()?;
        self.rebuild_render_buffer();
        Ok(())
    }

    pub fn return_to_select(&mut self) {
        self.campaign.return_to_select();
        self.rebuild_render_buffer();
    }

    fn rebuild_render_buffer(&mut self) {
        match self.campaign.level() {
            Some(level) => build_render_buffer(level, &mut self.render_buffer),
            None => self.render_buffer.clear(),
        }
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn phase(&self) -> Phase {
        self.campaign.phase()
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn actor_split(&self) -> u32 {
        self.render_buffer.actor_split
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    // ---- JSON views ----

    pub fn hud_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string(&self.campaign.hud())?)
    }

    pub fn results_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string(self.campaign.results())?)
    }

    pub fn levels_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string(self.campaign.catalog())?)
    }
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new(builtin_catalog(), GameConfig::default())
    }
}
