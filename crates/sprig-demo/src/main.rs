use anyhow::{Context, Result};

use sprig_engine::coords::{Color, LineStyle, Vec2};
use sprig_engine::input::{KeyPhase, PointerPhase, RawInput};
use sprig_engine::logging::{LoggingConfig, init_logging};
use sprig_engine::render::HeadlessRenderer;
use sprig_engine::shape::{CircleShape, ImageAsset, LineShape, PolygonShape, Shape};
use sprig_engine::audio::SilentAudio;
use sprig_engine::time::FrameTime;
use sprig_engine::{App, AppConfig, AppControl, Kind, Sprite, SpriteId};

const DEFAULT_TICKS: u64 = 240;
const GUIDE: Kind = Kind::new("guide");

/// Four lines that trace a sprite's bounding box.
struct Guides {
    top: SpriteId,
    bottom: SpriteId,
    left: SpriteId,
    right: SpriteId,
}

impl Guides {
    fn spawn(app: &mut App, color: Color) -> Result<Self> {
        let style = LineStyle::new(1.0, color);
        let mut line = |dx: f32, dy: f32| {
            Sprite::builder(LineShape::new(dx, dy).with_line(style))
                .kind(GUIDE)
                .spawn(app)
        };
        Ok(Self {
            top: line(500.0, 0.0)?,
            bottom: line(500.0, 0.0)?,
            left: line(0.0, 500.0)?,
            right: line(0.0, 500.0)?,
        })
    }

    fn track(&self, app: &mut App, target: SpriteId) {
        let Some(e) = app.sprite_mut(target).map(|s| s.extents()) else {
            return;
        };
        for (id, y) in [(self.top, e.ymin), (self.bottom, e.ymax)] {
            if let Some(s) = app.sprite_mut(id) {
                s.set_y(y);
            }
        }
        for (id, x) in [(self.left, e.xmin), (self.right, e.xmax)] {
            if let Some(s) = app.sprite_mut(id) {
                s.set_x(x);
            }
        }
    }
}

/// The spinning, growing bunny chasing a concave polygon.
struct Scene {
    bunny: SpriteId,
    poly: SpriteId,
    bunny_guides: Guides,
    poly_guides: Guides,
    anchor: f32,
    step: f32,
    scale: f32,
    hits: u32,
}

impl Scene {
    fn build(app: &mut App) -> Result<Self> {
        let red = Color::opaque(0xff0000);
        let blue = Color::opaque(0x0000ff);
        let line = LineStyle::new(0.0, red);

        let bunny_image = ImageAsset::load(app.renderer_mut(), "bunny.png").context("loading bunny")?;
        let bunny = Sprite::builder(bunny_image).position(200.0, 300.0).anchor(0.5, 0.5).spawn(app)?;

        let poly = PolygonShape::new([(0.0, 0.0), (50.0, 75.0), (100.0, 60.0), (90.0, 150.0), (45.0, 100.0), (0.0, 0.0)])
            .with_style(line, red);
        let poly = Sprite::builder(poly).position(375.0, 255.0).kind(Kind::new("poly")).spawn(app)?;

        // Decorations that are never tested for collisions.
        let circles: [Shape; 2] = [
            CircleShape::new(75.0).with_style(line, red).into(),
            CircleShape::new(55.0).with_style(line, blue).into(),
        ];
        for (i, c) in circles.into_iter().enumerate() {
            Sprite::builder(c).position(40.0 + 160.0 * i as f32, 40.0).hidden().spawn(app)?;
        }

        Ok(Self {
            bunny,
            poly,
            bunny_guides: Guides::spawn(app, red)?,
            poly_guides: Guides::spawn(app, blue)?,
            anchor: 0.0,
            step: 0.01,
            scale: 0.5,
            hits: 0,
        })
    }

    fn tick(&mut self, app: &mut App, time: FrameTime) -> AppControl {
        self.scale += self.step;
        if let Some(s) = app.sprite_mut(self.bunny) {
            s.set_anchor(Vec2::new(self.anchor, self.anchor));
            s.set_rotation(s.rotation() + 10.0 * self.step);
            s.set_scale(self.scale);
            s.translate(1.0, 0.0);
        }
        self.anchor += self.step;
        if self.anchor >= 1.0 || self.anchor <= 0.0 {
            self.step = -self.step;
        }

        self.bunny_guides.track(app, self.bunny);
        self.poly_guides.track(app, self.poly);

        match app.collides_with(self.bunny, self.poly) {
            Ok(true) => {
                self.hits += 1;
                log::info!("frame {}: BANG", time.frame_index);
            }
            Ok(false) => {}
            Err(err) => {
                log::error!("collision query failed: {err}");
                return AppControl::Exit;
            }
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let ticks = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid tick count '{arg}'"))?,
        None => DEFAULT_TICKS,
    };

    let renderer = HeadlessRenderer::new().with_image("bunny.png", 26.0, 37.0);
    let mut app = App::new(
        AppConfig::sized(640, 480).with_title("sprig demo"),
        Box::new(renderer),
        Box::new(SilentAudio::new()),
    );

    let mut scene = Scene::build(&mut app)?;

    app.on_key(KeyPhase::Down, "e", |_, ev| {
        log::info!("BOOM ({:?})", ev.key());
        ev.consume();
    });
    app.on_pointer(PointerPhase::Down, |_, ev| {
        log::info!("squeek! at ({:.0}, {:.0})", ev.x(), ev.y());
    });

    let mut game = |app: &mut App, time: FrameTime| {
        // Scripted input standing in for a user.
        match time.frame_index {
            30 => app.dispatch(RawInput::key(KeyPhase::Down, 69)),
            60 => app.dispatch(RawInput::pointer(PointerPhase::Down, 320.0, 240.0)),
            _ => {}
        }
        scene.tick(app, time)
    };
    let ran = app.run_for(&mut game, ticks);

    log::info!(
        "ran {ran} tick(s), {} collision frame(s), {} sprite(s) on stage",
        scene.hits,
        app.registry().len()
    );
    app.reset();
    Ok(())
}
