//! CorePlugin owns the run-state machine and the per-tick phase ordering.
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

/// Top-level run state: the loop runs until a quit signal is observed.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Running,
    Stopped,
}

/// Frame phases executed in order each tick: drain input, update world
/// state, then mirror state into the renderer.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Update,
    Render,
}

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct FrameRateLog {
    timer: Timer,
    frames: u32,
}

#[cfg(feature = "core_debug")]
impl Default for FrameRateLog {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
            frames: 0,
        }
    }
}

/// Registers the run state, the frame phase sets, and the quit watcher.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Update, FrameSet::Render).chain(),
            )
            .add_systems(Startup, log_startup_state)
            .add_systems(Update, watch_for_quit.in_set(FrameSet::Input));

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(FrameRateLog::default())
                .add_systems(Update, log_frame_rate);
        }
    }
}

fn log_startup_state(state: Res<State<GameState>>) {
    info!("CorePlugin initialised in state: {:?}", state.get());
}

/// Observes window close requests and performs the single
/// Running -> Stopped transition, then asks the app to exit. The current
/// tick still finishes; no gameplay system runs on later ticks.
pub fn watch_for_quit(
    mut close_requests: MessageReader<WindowCloseRequested>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    if close_requests.is_empty() {
        return;
    }
    close_requests.clear();

    if *state.get() == GameState::Running {
        info!("Quit requested; stopping frame loop");
        next_state.set(GameState::Stopped);
        exit.write(AppExit::Success);
    }
}

#[cfg(feature = "core_debug")]
fn log_frame_rate(time: Res<Time>, mut log: ResMut<FrameRateLog>) {
    log.frames += 1;
    if log.timer.tick(time.delta()).just_finished() {
        info!(target: "core_debug", "{} frames in the last second", log.frames);
        log.frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use bevy::state::app::StatesPlugin;

    fn quit_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.init_state::<GameState>();
        app.add_message::<WindowCloseRequested>();
        app.add_systems(Update, watch_for_quit);
        app
    }

    fn request_close(app: &mut App) {
        let window = app.world_mut().spawn_empty().id();
        app.world_mut()
            .resource_mut::<Messages<WindowCloseRequested>>()
            .write(WindowCloseRequested { window });
    }

    #[test]
    fn close_request_stops_the_loop() {
        let mut app = quit_app();
        request_close(&mut app);

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::Stopped
        );
        assert!(!app.world().resource::<Messages<AppExit>>().is_empty());
    }

    #[test]
    fn loop_keeps_running_without_a_close_request() {
        let mut app = quit_app();

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::Running
        );
    }
}
