use rand::SeedableRng;
use rand::rngs::StdRng;
use rpong::config::{GameConfig, SpawnPolicy};
use rpong::game::{Session, Status};

const CENTRED_PADDLE: i32 = 214;

fn serve(x: f32, y: f32, speed: [f32; 2]) -> Session {
    let config = GameConfig {
        spawn_policy: SpawnPolicy::FixedPosition { x, y },
        // balls are launched against their configured speed
        ball_speed: [-speed[0], -speed[1]],
        ..GameConfig::default()
    };
    Session::with_rng(config, &mut StdRng::seed_from_u64(0)).unwrap()
}

#[test]
fn centred_paddle_returns_ball_served_at_its_height() {
    let mut session = serve(700.0, 242.0, [10.0, 1.0]);
    assert_eq!(session.paddle().bounds(), (214.0, 261.0));

    for _ in 0..7 {
        assert_eq!(session.step(CENTRED_PADDLE).points, 0);
    }
    let report = session.step(CENTRED_PADDLE);

    assert_eq!(report.points, 1);
    assert_eq!(session.score(), 1);
    assert_eq!(session.status(), Status::Playing);
    assert_eq!(session.balls()[0].position, [780.0, 250.0]);
    assert!(session.balls()[0].velocity[0] < 0.0);
}

#[test]
fn paddle_at_top_misses_low_ball() {
    let mut session = serve(700.0, 320.0, [10.0, 10.0]);

    for _ in 0..7 {
        session.step(0);
        assert!(session.is_playing());
    }
    assert_eq!(session.paddle().bounds(), (10.0, 57.0));

    let report = session.step(0);
    assert!(report.missed);
    assert_eq!(session.balls()[0].position, [780.0, 400.0]);
    assert_eq!(session.status(), Status::GameOver);

    for _ in 0..50 {
        session.step(0);
        assert_eq!(session.status(), Status::GameOver);
    }
    assert_eq!(session.score(), 0);
}

#[test]
fn default_serve_beats_a_still_paddle() {
    let mut session =
        Session::with_rng(GameConfig::default(), &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(session.balls()[0].position, [780.0, 242.0]);

    let mut frames = 0;
    while session.is_playing() && frames < 1_000 {
        session.step(CENTRED_PADDLE);
        frames += 1;
    }

    // left wall at frame 76, back at the paddle plane at frame 152, low after
    // three wall bounces
    assert_eq!(frames, 152);
    assert_eq!(session.balls()[0].position, [780.0, 402.0]);
    assert_eq!(session.score(), 0);
}

#[test]
fn tracking_paddle_keeps_scoring_and_speeds_ball_up() {
    let mut session =
        Session::with_rng(GameConfig::default(), &mut StdRng::seed_from_u64(0)).unwrap();
    let half_paddle = session.paddle().height as f32 / 2.0;

    let mut frames = 0;
    while session.score() < 5 && frames < 5_000 {
        let pointer = (session.balls()[0].position[1] - half_paddle) as i32;
        let before = session.score();
        session.step(pointer);
        assert!(session.is_playing(), "missed at frame {frames}");

        if session.score() == 3 && before == 2 {
            let [vx, vy] = session.balls()[0].velocity;
            assert_eq!(vx.abs(), 12.0);
            assert_eq!(vy.abs(), 12.0);
        }
        frames += 1;
    }

    assert_eq!(session.score(), 5);
    let [vx, vy] = session.balls()[0].velocity;
    assert_eq!((vx.abs(), vy.abs()), (12.0, 12.0));
}

#[test]
fn several_balls_share_one_score() {
    let config = GameConfig {
        ball_count: 4,
        spawn_policy: SpawnPolicy::RandomPosition,
        ..GameConfig::default()
    };
    let mut session = Session::with_rng(config, &mut StdRng::seed_from_u64(11)).unwrap();
    let mut frames = 0;
    while session.is_playing() && frames < 10_000 {
        session.step(CENTRED_PADDLE);
        frames += 1;
    }
    assert_eq!(session.status(), Status::GameOver);
    assert_eq!(session.balls().len(), 4);

    let score = session.score();
    session.step(CENTRED_PADDLE);
    assert_eq!(session.score(), score);
}
