//! Headless native demo: auto-plays a built-in melody through the cpal synth,
//! pops the sphere nearest the origin on every fired note, and optionally
//! records the mixed output to a WAV file.

mod synth;

use std::time::{Duration, Instant};

use clap::Parser;

use app_core::{
    AudioSink, NoteMapping, NullSink, Population, Song, SpawnProfile, Transport, INITIAL_SPHERES,
};

#[derive(Parser, Debug)]
#[command(version, about = "popling: an interactive note-popping toy (headless demo)")]
struct Args {
    /// Song to auto-play (twinkle or ode)
    #[arg(long, default_value = "twinkle")]
    song: String,

    /// Maximum run time in seconds
    #[arg(long, default_value_t = 30.0)]
    seconds: f64,

    /// RNG seed for the sphere population
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Record the mixed output and write it to this WAV path on exit
    #[arg(long)]
    wav: Option<String>,

    /// Spawn spheres within arm's reach at eye level (immersive profile)
    /// instead of the full desktop cube
    #[arg(long, default_value_t = false)]
    contained: bool,

    /// Key notes off sphere color instead of size and speed
    #[arg(long, default_value_t = false)]
    color_notes: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let song = Song::from_name(&args.song)
        .ok_or_else(|| anyhow::anyhow!("unknown song {:?} (try twinkle or ode)", args.song))?;
    let profile = if args.contained {
        SpawnProfile::Contained
    } else {
        SpawnProfile::Open
    };
    let mapping = if args.color_notes {
        NoteMapping::ColorKeyed
    } else {
        NoteMapping::Continuous
    };

    let mut population = Population::new(INITIAL_SPHERES, profile, mapping, args.seed);
    let mut transport = Transport::new();
    let triggers = transport.subscribe();

    let (mut sink, _stream, synth_state): (Box<dyn AudioSink>, _, _) = match synth::start_output() {
        Some((sink, stream, state)) => (Box::new(sink), Some(stream), Some(state)),
        None => {
            log::warn!("no audio output device; running silent");
            (Box::new(NullSink::default()), None, None)
        }
    };

    if args.wav.is_some() {
        match &synth_state {
            Some(state) => state.lock().unwrap().recorder.start(),
            None => log::warn!("recording requested but audio is unavailable"),
        }
    }

    transport.play(song.events(), 0.0);
    log::info!("playing {} ({} notes)", song.name(), song.events().len());

    // Scripted gesture: hold the first sphere briefly so the demo exercises
    // sustained notes before the melody takes over.
    let held_id = population.iter().next().map(|s| s.id);
    let mut pressed = false;
    let mut released = false;

    let mut sphere_snaps = Vec::new();
    let mut particle_snaps = Vec::new();
    let start = Instant::now();
    let mut last = start;
    loop {
        std::thread::sleep(Duration::from_millis(16));
        let now = start.elapsed().as_secs_f64();
        let frame = Instant::now();
        let dt = (frame - last).as_secs_f32();
        last = frame;

        if let Some(id) = held_id {
            if !pressed && now >= 0.25 {
                pressed = true;
                if let Some(pitch) = population.press(id, sink.as_mut()) {
                    log::info!("holding sphere {} -> {}", id, pitch);
                }
            }
            if pressed && !released && now >= 0.75 {
                released = true;
                population.release(id, sink.as_mut());
            }
        }

        transport.tick(now, sink.as_mut());
        while let Ok(trigger) = triggers.try_recv() {
            if let Some(id) = population.auto_pop_closest(trigger.at_sec, sink.as_mut()) {
                log::info!("note {} pops sphere {}", trigger.pitch, id);
            }
        }
        population.tick(dt);
        population.snapshot(&mut sphere_snaps, &mut particle_snaps);
        log::trace!(
            "{} spheres, {} burst particles",
            sphere_snaps.len(),
            particle_snaps.len()
        );

        if now >= args.seconds {
            break;
        }
        if now > 1.0 && !transport.is_playing() && particle_snaps.is_empty() {
            break;
        }
    }
    transport.stop();

    if let Some(path) = &args.wav {
        if let Some(state) = &synth_state {
            let blob = state.lock().unwrap().recorder.stop()?;
            std::fs::write(path, &blob)?;
            log::info!("wrote {} bytes to {path}", blob.len());
        }
    }
    Ok(())
}
