use std::time::Instant;

use anyhow::{Context, Result};

use crate::audio::{Audio, SilentAudio, Sound, SoundAsset};
use crate::coords::Vec2;
use crate::error::{RegistryError, RouteError};
use crate::events::{EventRouter, KeyEvent, KeyTarget, Listener, PointerEvent, key_name, route};
use crate::input::{InputEvent, KeyPhase, PointerPhase, PointerTracker, RawInput};
use crate::registry::Registry;
use crate::render::{HeadlessRenderer, Renderer};
use crate::sprite::{Kind, Sprite, SpriteBuilder, SpriteId};
use crate::time::{FrameClock, FrameTime};

use super::config::AppConfig;
use super::game::{AppControl, Game};

pub type KeyListener = Listener<App, KeyEvent>;
pub type PointerListener = Listener<App, PointerEvent>;

/// One running session: live sprites, subscriptions and collaborators.
///
/// Only one thread ever touches an `App`. Listeners and per-tick logic get
/// `&mut App` and may spawn, move or destroy sprites and change
/// subscriptions while running.
pub struct App {
    config: AppConfig,
    stage: Vec2,
    registry: Registry,
    router: EventRouter<App>,
    renderer: Box<dyn Renderer>,
    audio: Box<dyn Audio>,
    clock: FrameClock,
    tracker: PointerTracker,
}

impl App {
    pub fn new(config: AppConfig, renderer: Box<dyn Renderer>, audio: Box<dyn Audio>) -> Self {
        let viewport = renderer.viewport_rect();
        let stage = Vec2::new(
            if config.width == 0 { viewport.width } else { config.width as f32 },
            if config.height == 0 { viewport.height } else { config.height as f32 },
        );
        log::info!("session '{}' started, stage {}x{}", config.title, stage.x, stage.y);
        Self {
            registry: Registry::with_narrow_phase(config.collision.narrow_phase()),
            router: EventRouter::new(),
            clock: FrameClock::new(),
            tracker: PointerTracker::new(config.double_click),
            config,
            stage,
            renderer,
            audio,
        }
    }

    /// Session backed by a [`HeadlessRenderer`] and [`SilentAudio`].
    pub fn headless(config: AppConfig) -> Self {
        Self::new(config, Box::new(HeadlessRenderer::new()), Box::new(SilentAudio::new()))
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Stage size in pixels.
    #[inline]
    pub fn stage_size(&self) -> Vec2 {
        self.stage
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.stage.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.stage.y
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn router(&self) -> &EventRouter<App> {
        &self.router
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    #[inline]
    pub fn audio_mut(&mut self) -> &mut dyn Audio {
        &mut *self.audio
    }

    // ── sprites ───────────────────────────────────────────────────────────

    /// Builds a sprite, registers it and puts it on top of the scene.
    pub fn spawn(&mut self, builder: SpriteBuilder) -> Result<SpriteId> {
        let mut sprite = builder.build(&mut *self.renderer, self.registry.id())?;
        let handle = sprite.display_handle();
        if let Some(props) = sprite.take_display_update() {
            self.renderer.update_display_object(handle, &props);
        }
        let id = match self.registry.register(sprite) {
            Ok(id) => id,
            Err(err) => {
                self.renderer.remove_from_scene(handle);
                return Err(err).context("registering new sprite");
            }
        };
        self.renderer.add_to_scene(handle);
        log::debug!("spawned sprite {id}");
        Ok(id)
    }

    /// Unregisters a sprite and removes it from the scene.
    pub fn destroy(&mut self, id: SpriteId) -> Result<(), RegistryError> {
        let sprite = self.registry.unregister(id)?;
        self.renderer.remove_from_scene(sprite.display_handle());
        log::debug!("destroyed sprite {id}");
        Ok(())
    }

    #[inline]
    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        self.registry.get(id)
    }

    #[inline]
    pub fn sprite_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.registry.get_mut(id)
    }

    /// Live sprites of `kind`, in insertion order.
    #[inline]
    pub fn sprites_of_kind(&self, kind: &Kind) -> &[SpriteId] {
        self.registry.of_kind(kind)
    }

    pub fn collides_with(&mut self, a: SpriteId, b: SpriteId) -> Result<bool, RegistryError> {
        self.registry.collides_with(a, b)
    }

    pub fn colliding_with(&mut self, id: SpriteId, kind: Option<&Kind>) -> Result<Vec<SpriteId>, RegistryError> {
        self.registry.colliding_with(id, kind)
    }

    // ── sounds ────────────────────────────────────────────────────────────

    pub fn load_sound(&mut self, asset: SoundAsset) -> Result<Sound> {
        Sound::load(&mut *self.audio, asset)
    }

    // ── subscriptions ─────────────────────────────────────────────────────

    pub fn subscribe_key(&mut self, phase: KeyPhase, target: impl Into<KeyTarget>, listener: KeyListener) {
        let target = target.into();
        log::debug!("subscribe {phase} {target}");
        self.router.subscribe_key(phase, target, listener);
    }

    /// Subscribes a closure and returns its listener handle for unsubscribing.
    pub fn on_key(
        &mut self,
        phase: KeyPhase,
        target: impl Into<KeyTarget>,
        f: impl FnMut(&mut App, &mut KeyEvent) + 'static,
    ) -> KeyListener {
        let listener = Listener::new(f);
        self.subscribe_key(phase, target, listener.clone());
        listener
    }

    pub fn unsubscribe_key(
        &mut self,
        phase: KeyPhase,
        target: impl Into<KeyTarget>,
        listener: &KeyListener,
    ) -> Result<(), RouteError> {
        self.router.unsubscribe_key(phase, target, listener)
    }

    pub fn subscribe_pointer(&mut self, phase: PointerPhase, listener: PointerListener) {
        log::debug!("subscribe {phase}");
        self.router.subscribe_pointer(phase, listener);
    }

    pub fn on_pointer(
        &mut self,
        phase: PointerPhase,
        f: impl FnMut(&mut App, &mut PointerEvent) + 'static,
    ) -> PointerListener {
        let listener = Listener::new(f);
        self.subscribe_pointer(phase, listener.clone());
        listener
    }

    pub fn unsubscribe_pointer(&mut self, phase: PointerPhase, listener: &PointerListener) -> Result<(), RouteError> {
        self.router.unsubscribe_pointer(phase, listener)
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Routes one raw notification to its listeners.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// unsubscribe while the event is being delivered; the change applies
    /// from the next event on. No event is built if nobody listens.
    pub fn dispatch(&mut self, input: RawInput) {
        match input {
            RawInput::Key { phase, code } => {
                let snapshot = self.router.key_snapshot(phase, key_name(code));
                if snapshot.is_empty() {
                    return;
                }
                let mut ev = KeyEvent::new(phase, code);
                let ran = route(self, &snapshot, &mut ev);
                log::trace!("{phase} {code}: {ran}/{} listener(s) ran", snapshot.len());
            }
            RawInput::Pointer { phase, client_x, client_y, delta_y } => {
                let snapshot = self.router.pointer_snapshot(phase);
                if snapshot.is_empty() {
                    return;
                }
                let viewport = self.renderer.viewport_rect();
                let mut ev = PointerEvent::from_client(
                    phase,
                    Vec2::new(client_x, client_y),
                    delta_y,
                    viewport,
                    self.stage,
                );
                let ran = route(self, &snapshot, &mut ev);
                log::trace!("{phase}: {ran}/{} listener(s) ran", snapshot.len());
            }
        }
        self.sync_display();
    }

    /// Feeds a window-level event through the pointer tracker and dispatches
    /// every notification it produces.
    pub fn handle_input_event(&mut self, event: InputEvent, now: Instant) {
        for raw in self.tracker.apply_event(event, now) {
            self.dispatch(raw);
        }
    }

    // ── frames ────────────────────────────────────────────────────────────

    /// Runs one tick: advance the clock, step `game`, push display changes
    /// and ask for the next frame.
    pub fn tick(&mut self, game: &mut dyn Game) -> AppControl {
        let time = self.clock.tick();
        self.step(game, time)
    }

    /// Like [`tick`](Self::tick) with an explicit timestamp.
    pub fn tick_at(&mut self, game: &mut dyn Game, now: Instant) -> AppControl {
        let time = self.clock.tick_at(now);
        self.step(game, time)
    }

    fn step(&mut self, game: &mut dyn Game, time: FrameTime) -> AppControl {
        let control = game.step(self, time);
        self.sync_display();
        if control == AppControl::Continue {
            self.renderer.request_next_frame();
        }
        control
    }

    /// Ticks until `game` exits or `max_ticks` ticks have run. Returns the
    /// number of ticks run.
    pub fn run_for(&mut self, game: &mut dyn Game, max_ticks: u64) -> u64 {
        let mut ticks = 0;
        while ticks < max_ticks {
            ticks += 1;
            if self.tick(game) == AppControl::Exit {
                log::info!("session '{}' exited after {ticks} tick(s)", self.config.title);
                break;
            }
        }
        ticks
    }

    /// Pushes the display state of every sprite that changed since the last push.
    pub fn sync_display(&mut self) {
        for sprite in self.registry.sprites_mut() {
            if let Some(props) = sprite.take_display_update() {
                self.renderer.update_display_object(sprite.display_handle(), &props);
            }
        }
    }

    /// Tears the session down so a new one can start: every sprite is
    /// destroyed, every subscription dropped, sounds stopped and the clock
    /// restarted.
    pub fn reset(&mut self) {
        let sprites = self.registry.reset();
        for sprite in &sprites {
            self.renderer.remove_from_scene(sprite.display_handle());
        }
        self.router.clear();
        self.audio.stop_all();
        self.clock.reset();
        self.tracker = PointerTracker::new(self.config.double_click);
        log::info!("session '{}' reset, {} sprite(s) removed", self.config.title, sprites.len());
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("title", &self.config.title)
            .field("stage", &self.stage)
            .field("registry", &self.registry)
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use crate::coords::ViewportRect;
    use crate::input::{MouseButton, MouseButtonState};
    use crate::shape::RectangleShape;

    fn shared_app(viewport: ViewportRect, config: AppConfig) -> (App, Rc<RefCell<HeadlessRenderer>>) {
        let r = Rc::new(RefCell::new(HeadlessRenderer::new().with_viewport(viewport)));
        let app = App::new(config, Box::new(r.clone()), Box::new(SilentAudio::new()));
        (app, r)
    }

    // ── stage ─────────────────────────────────────────────────────────────

    #[test]
    fn zero_size_takes_viewport() {
        let (app, _) = shared_app(ViewportRect::new(0.0, 0.0, 800.0, 600.0), AppConfig::default());
        assert_eq!(app.stage_size(), Vec2::new(800.0, 600.0));
        let (app, _) = shared_app(ViewportRect::new(0.0, 0.0, 800.0, 600.0), AppConfig::sized(640, 480));
        assert_eq!(app.stage_size(), Vec2::new(640.0, 480.0));
    }

    // ── sprites ───────────────────────────────────────────────────────────

    #[test]
    fn spawn_adds_to_scene_and_destroy_removes() {
        let (mut app, r) = shared_app(ViewportRect::new(0.0, 0.0, 100.0, 100.0), AppConfig::default());
        let id = app.spawn(SpriteBuilder::new(RectangleShape::new(5.0, 5.0)).position(1.0, 2.0)).unwrap();
        let handle = app.sprite(id).unwrap().display_handle();
        {
            let r = r.borrow();
            assert_eq!(r.scene().len(), 1);
            let props = r.props(handle).unwrap();
            assert!(props.visible);
            assert_eq!(props.position, Vec2::new(1.0, 2.0));
        }
        app.destroy(id).unwrap();
        assert!(r.borrow().scene().is_empty());
        assert_eq!(app.destroy(id), Err(RegistryError::UnknownSprite(id)));
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn pointer_events_arrive_in_stage_coordinates() {
        let (mut app, _) = shared_app(ViewportRect::new(100.0, 50.0, 320.0, 240.0), AppConfig::sized(640, 480));
        let seen = Rc::new(Cell::new(Vec2::zero()));
        let s = seen.clone();
        app.on_pointer(PointerPhase::Move, move |_, ev| s.set(ev.position()));
        app.dispatch(RawInput::pointer(PointerPhase::Move, 260.0, 170.0));
        assert_eq!(seen.get(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn listeners_can_move_sprites() {
        let mut app = App::headless(AppConfig::sized(100, 100));
        let id = app.spawn(SpriteBuilder::new(RectangleShape::new(5.0, 5.0))).unwrap();
        app.on_key(KeyPhase::Down, "right arrow", move |app, ev| {
            if let Some(s) = app.sprite_mut(id) {
                s.translate(10.0, 0.0);
            }
            ev.consume();
        });
        app.dispatch(RawInput::key(KeyPhase::Down, 39));
        app.dispatch(RawInput::key(KeyPhase::Down, 39));
        assert_eq!(app.sprite(id).unwrap().x(), 20.0);
    }

    #[test]
    fn listener_may_unsubscribe_itself() {
        let mut app = App::headless(AppConfig::default());
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<KeyListener>>> = Rc::new(RefCell::new(None));
        let (c, me) = (count.clone(), slot.clone());
        let listener = app.on_key(KeyPhase::Down, "*", move |app, _| {
            c.set(c.get() + 1);
            if let Some(l) = me.borrow_mut().take() {
                app.unsubscribe_key(KeyPhase::Down, "*", &l).unwrap();
            }
        });
        *slot.borrow_mut() = Some(listener);
        app.dispatch(RawInput::key(KeyPhase::Down, 65));
        app.dispatch(RawInput::key(KeyPhase::Down, 65));
        assert_eq!(count.get(), 1);
        assert!(app.router().is_empty());
    }

    #[test]
    fn window_clicks_become_click_notifications() {
        let mut app = App::headless(AppConfig::default());
        let clicks = Rc::new(Cell::new(0));
        let doubles = Rc::new(Cell::new(0));
        let (c, d) = (clicks.clone(), doubles.clone());
        app.on_pointer(PointerPhase::Click, move |_, _| c.set(c.get() + 1));
        app.on_pointer(PointerPhase::DoubleClick, move |_, _| d.set(d.get() + 1));

        let t0 = Instant::now();
        let press = InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Pressed };
        let release = InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Released };
        app.handle_input_event(InputEvent::PointerMoved { x: 10.0, y: 10.0 }, t0);
        app.handle_input_event(press.clone(), t0);
        app.handle_input_event(release.clone(), t0);
        app.handle_input_event(press, t0 + Duration::from_millis(100));
        app.handle_input_event(release, t0 + Duration::from_millis(120));
        assert_eq!(clicks.get(), 2);
        assert_eq!(doubles.get(), 1);
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn run_for_stops_on_exit_and_syncs_display() {
        let (mut app, r) = shared_app(ViewportRect::new(0.0, 0.0, 100.0, 100.0), AppConfig::default());
        let id = app.spawn(SpriteBuilder::new(RectangleShape::new(5.0, 5.0))).unwrap();
        let mut game = move |app: &mut App, t: FrameTime| {
            if let Some(s) = app.sprite_mut(id) {
                s.translate(1.0, 0.0);
            }
            if t.frame_index == 4 { AppControl::Exit } else { AppControl::Continue }
        };
        assert_eq!(app.run_for(&mut game, 100), 5);
        let handle = app.sprite(id).unwrap().display_handle();
        let r = r.borrow();
        assert_eq!(r.props(handle).unwrap().position, Vec2::new(5.0, 0.0));
        assert_eq!(r.frames_requested(), 4);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_clears_sprites_subscriptions_and_scene() {
        let (mut app, r) = shared_app(ViewportRect::new(0.0, 0.0, 100.0, 100.0), AppConfig::default());
        app.spawn(SpriteBuilder::new(RectangleShape::new(5.0, 5.0)).kind(Kind::new("wall"))).unwrap();
        app.on_key(KeyPhase::Down, "*", |_, _| {});
        app.on_pointer(PointerPhase::Click, |_, _| {});
        app.reset();
        assert!(app.registry().is_empty());
        assert!(app.sprites_of_kind(&Kind::new("wall")).is_empty());
        assert!(app.router().is_empty());
        assert!(r.borrow().scene().is_empty());
        app.spawn(SpriteBuilder::new(RectangleShape::new(5.0, 5.0))).unwrap();
        assert_eq!(app.registry().len(), 1);
    }
}
