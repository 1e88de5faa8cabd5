use std::{
    env, io, process,
    time::{Duration, Instant},
};

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{error, info, warn};
use spritzer_core::{
    ManualTimer, Metrics, PlaybackState, Spritzer, SpritzerConfig, TickOutcome,
};

use controls::Command;
use terminal::TerminalSink;

#[path = "main/controls.rs"]
mod controls;
#[path = "main/options.rs"]
mod options;
#[path = "main/terminal.rs"]
mod terminal;

type TerminalSpritzer = Spritzer<ManualTimer, Metrics, TerminalSink<io::Stdout>>;

fn main() {
    env_logger::init();

    let options = match options::Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("spritzer: {err}");
            eprintln!("{}", options::USAGE);
            process::exit(2);
        }
    };

    let config = SpritzerConfig {
        wpm: options.wpm,
        ..SpritzerConfig::default()
    };
    let mut spritzer = Spritzer::new(
        ManualTimer::new(),
        Metrics::columns(options.columns),
        TerminalSink::new(io::stdout()),
        config,
    );
    spritzer.set_text(&options.text);
    info!(
        "loaded {} words, about {} min at {} wpm",
        spritzer.total_words(),
        spritzer.minutes_remaining_in_queue(),
        spritzer.wpm()
    );

    let (command_tx, command_rx) = crossbeam_channel::unbounded();
    let mut commands = match controls::spawn(command_tx) {
        Ok(_) => Some(command_rx),
        Err(err) => {
            warn!("controls unavailable: {}", err);
            None
        }
    };

    match spritzer.pivot_alignment() {
        Ok(alignment) => {
            if let Err(err) = spritzer.sink_mut().draw_guide(alignment) {
                warn!("guide draw failed: {}", err);
            }
        }
        Err(err) => {
            error!("terminal too narrow: {}", err);
            process::exit(1);
        }
    }

    let loop_start = Instant::now();
    if let Err(err) = spritzer.start() {
        error!("playback failed to start: {}", err);
        process::exit(1);
    }

    loop {
        pump_timers(&mut spritzer, elapsed_ms(loop_start));
        if spritzer.state() == PlaybackState::Completed {
            break;
        }

        let now_ms = elapsed_ms(loop_start);
        let wait = spritzer
            .timer()
            .next_deadline_ms()
            .map(|due_ms| Duration::from_millis(due_ms.saturating_sub(now_ms)));

        let received = commands.as_ref().map(|rx| next_command(rx, wait));
        let command = match (received, wait) {
            (Some(Ok(command)), _) => command,
            (Some(Err(())), _) => {
                commands = None;
                None
            }
            (None, Some(wait)) => {
                std::thread::sleep(wait);
                None
            }
            // Paused with no way to resume.
            (None, None) => break,
        };

        if let Some(command) = command {
            pump_timers(&mut spritzer, elapsed_ms(loop_start));
            if !apply(&mut spritzer, command) {
                break;
            }
        }
    }

    report(&spritzer, loop_start);
}

/// Deliver every timer due by `now_ms`.
fn pump_timers(spritzer: &mut TerminalSpritzer, now_ms: u64) {
    while let Some(handle) = spritzer.timer_mut().advance_to(now_ms) {
        match spritzer.on_timer(handle) {
            Ok(TickOutcome::Completed) => info!("finished"),
            Ok(_) => {}
            Err(err) => warn!("tick failed: {}", err),
        }
    }
}

/// Wait for a command until `wait` runs out. `Err` once the input thread
/// has gone away.
fn next_command(rx: &Receiver<Command>, wait: Option<Duration>) -> Result<Option<Command>, ()> {
    match wait {
        Some(wait) => match rx.recv_timeout(wait) {
            Ok(command) => Ok(Some(command)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(()),
        },
        None => rx.recv().map(Some).map_err(|_| ()),
    }
}

/// Returns `false` when the loop should stop.
fn apply(spritzer: &mut TerminalSpritzer, command: Command) -> bool {
    match command {
        Command::Toggle => match spritzer.toggle() {
            Ok(PlaybackState::Paused) => info!(
                "paused at word {}/{}, about {} min left",
                spritzer.current_word_index(),
                spritzer.total_words(),
                spritzer.minutes_remaining_in_queue()
            ),
            Ok(_) => {}
            Err(err) => warn!("resume failed: {}", err),
        },
        Command::Faster | Command::Slower => {
            if spritzer.adjust_wpm(command == Command::Faster) {
                info!("wpm={}", spritzer.wpm());
            }
        }
        Command::Restart => {
            spritzer.rewind();
            if let Err(err) = spritzer.start() {
                warn!("restart failed: {}", err);
            }
        }
        Command::Quit => return false,
    }
    true
}

fn report(spritzer: &TerminalSpritzer, loop_start: Instant) {
    let words = spritzer.sink().shown() as u64;
    let elapsed_ms = elapsed_ms(loop_start).max(1);
    let wpm_x100 = words * 6_000_000 / elapsed_ms;

    info!(
        "effective_wpm={}.{:02} words={}/{} elapsed_ms={}",
        wpm_x100 / 100,
        wpm_x100 % 100,
        words,
        spritzer.sink().total(),
        elapsed_ms
    );
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
