//! Stage Demo - runs one round with random eliminations
//!
//! Usage: stage-demo [duration-secs] [participants] [tick-interval]
//!
//! The tick interval accepts human-readable durations ("1s", "250ms").
//! Set RUST_LOG=debug to see the per-tick remaining-time reports.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use stage_core::{ParticipantId, ParticipantSet, StageConfig, StageError, StageId};
use stage_runtime::{ChannelHost, HostMessage, RoundEvent, RoundOutcome, StageTimer};

#[derive(Error, Debug)]
enum DemoError {
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error(transparent)]
    Stage(#[from] StageError),
}

struct DemoArgs {
    duration: f64,
    participants: u64,
    tick_interval: Duration,
}

impl DemoArgs {
    fn parse() -> Result<Self, DemoError> {
        let mut args = std::env::args().skip(1);

        let duration = match args.next() {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseFloatError| {
                DemoError::InvalidArgument {
                    name: "duration",
                    reason: e.to_string(),
                }
            })?,
            None => 10.0,
        };
        let participants = match args.next() {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                DemoError::InvalidArgument {
                    name: "participants",
                    reason: e.to_string(),
                }
            })?,
            None => 4,
        };
        let tick_interval = match args.next() {
            Some(raw) => humantime::parse_duration(&raw).map_err(|e| DemoError::InvalidArgument {
                name: "tick-interval",
                reason: e.to_string(),
            })?,
            None => Duration::from_secs(1),
        };

        Ok(DemoArgs {
            duration,
            participants,
            tick_interval,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = DemoArgs::parse()?;
    let config = StageConfig::new(args.duration).with_tick_interval(args.tick_interval);
    let participants = ParticipantSet::from_ids((0..args.participants).map(ParticipantId::new))?;

    let (host, mut requests) = ChannelHost::new();
    let mut timer = StageTimer::new(StageId::new(1), config, participants.clone(), Arc::new(host));
    timer.begin()?;

    // Knock out a random participant now and then, the way gameplay would
    let eliminator = tokio::spawn({
        let participants = participants.clone();
        let interval = args.tick_interval * 2;
        async move {
            loop {
                tokio::time::sleep(interval).await;
                let alive = participants.snapshot();
                if alive.len() <= 1 {
                    break;
                }
                let victim = {
                    let mut rng = rand::thread_rng();
                    if !rng.gen_bool(0.5) {
                        continue;
                    }
                    alive[rng.gen_range(0..alive.len())]
                };
                if participants.remove(victim) {
                    tracing::info!(%victim, "participant eliminated");
                }
            }
        }
    });

    while let Some(message) = requests.recv().await {
        match message {
            HostMessage::Destroy(id) => println!("destroy requested: {id}"),
            HostMessage::Event(event) if event.is_terminal() => break,
            HostMessage::Event(RoundEvent::Remaining { remaining, .. }) => {
                println!("time remaining: {remaining}");
            }
            HostMessage::Event(_) => {}
        }
    }

    match timer.join().await {
        Some(RoundOutcome::LastStanding { survivor, tick }) => {
            println!("participant {survivor} wins at tick {tick}");
        }
        Some(RoundOutcome::TimeExpired { tick, destroyed }) => {
            println!("time up at tick {tick}, {} participants destroyed", destroyed.len());
        }
        None => println!("round did not complete"),
    }

    eliminator.abort();
    Ok(())
}
