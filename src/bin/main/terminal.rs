//! Line-oriented terminal presentation: renders pacer snapshots to stdout and
//! turns stdin commands into intents.

use std::{
    convert::Infallible,
    fmt,
    io::{self, BufRead, Write},
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::{debug, warn};
use read_chunker_core::{
    intent::{Intent, IntentSource},
    render::{Notice, PacerPhase, PacerSnapshot},
    speed::ReadingSpeed,
};

pub(super) const INTENT_QUEUE_DEPTH: usize = 8;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const HELP: &str = "\
commands:
  load <text>   split <text> into chunks and save it
  play | pause  start or stop automatic reveal
  <enter>       toggle play/pause (also: toggle, t)
  next | n      show the next chunk
  prev | p      show the previous chunk
  speed <wpm>   one of 200, 300, 400, 500, 600, 700
  fs            enter or leave fullscreen
  help | ?      show this text
  quit | q      exit";

pub(super) type IntentQueue = Channel<CriticalSectionRawMutex, Intent, INTENT_QUEUE_DEPTH>;

/// Pacer-side end of the intent queue filled by the command reader thread.
pub(super) struct ChannelIntents {
    queue: &'static IntentQueue,
}

impl ChannelIntents {
    pub(super) const fn new(queue: &'static IntentQueue) -> Self {
        Self { queue }
    }
}

impl IntentSource for ChannelIntents {
    type Error = Infallible;

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        Ok(self.queue.try_receive().ok())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Command {
    Intent(Intent),
    ToggleFullscreen,
    Help,
    Quit,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum CommandError {
    Unknown(String),
    MissingSpeed,
    UnsupportedSpeed(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(verb) => write!(f, "unknown command {verb:?}; type help"),
            Self::MissingSpeed => f.write_str("speed needs a value"),
            Self::UnsupportedSpeed(raw) => {
                write!(f, "{raw:?} is not offered; choose one of ")?;
                for (idx, speed) in ReadingSpeed::ALL.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", speed.wpm())?;
                }
                Ok(())
            }
        }
    }
}

/// Parse one input line. Text after `load ` is taken verbatim so that spacing
/// reaches the chunker unchanged.
pub(super) fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    let command = match verb {
        "" | "toggle" | "t" => Command::Intent(Intent::Toggle),
        "play" => Command::Intent(Intent::Play),
        "pause" => Command::Intent(Intent::Pause),
        "next" | "n" => Command::Intent(Intent::StepForward),
        "prev" | "p" => Command::Intent(Intent::StepBack),
        "load" => Command::Intent(Intent::Load(rest.to_owned())),
        "speed" => {
            let raw = rest.trim();
            if raw.is_empty() {
                return Err(CommandError::MissingSpeed);
            }
            let speed = raw
                .parse::<u16>()
                .ok()
                .and_then(|wpm| ReadingSpeed::try_from(wpm).ok())
                .ok_or_else(|| CommandError::UnsupportedSpeed(raw.to_owned()))?;
            Command::Intent(Intent::SetSpeed(speed.wpm()))
        }
        "fs" | "fullscreen" => Command::ToggleFullscreen,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };

    Ok(command)
}

/// Read commands from stdin on a dedicated thread until `quit` or EOF, then
/// raise `shutdown`. The thread owns the display's fullscreen flag and reports
/// each change to the pacer.
pub(super) fn spawn_command_reader(
    queue: &'static IntentQueue,
    shutdown: &'static AtomicBool,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("command-reader".into())
        .spawn(move || {
            let mut fullscreen = false;
            let stdin = io::stdin();

            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("input: stdin read failed: {}", err);
                        break;
                    }
                };

                match parse_command(&line) {
                    Ok(Command::Intent(intent)) => {
                        debug!("input: {:?}", intent);
                        embassy_futures::block_on(queue.send(intent));
                    }
                    Ok(Command::ToggleFullscreen) => {
                        fullscreen = !fullscreen;
                        embassy_futures::block_on(queue.send(Intent::SetFullscreen(fullscreen)));
                    }
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Quit) => break,
                    Err(err) => println!("{err}"),
                }
            }

            shutdown.store(true, Ordering::Release);
        })
}

pub(super) struct TerminalRenderer {
    out: io::Stdout,
}

impl TerminalRenderer {
    pub(super) fn new() -> Self {
        Self { out: io::stdout() }
    }

    pub(super) fn render(&mut self, snapshot: PacerSnapshot<'_>) -> io::Result<()> {
        let mut out = self.out.lock();
        if snapshot.fullscreen {
            write!(out, "{CLEAR_SCREEN}{}", fullscreen_view(&snapshot))?;
        } else {
            writeln!(out, "{}", status_line(&snapshot))?;
        }
        out.flush()
    }
}

fn phase_label(phase: PacerPhase) -> &'static str {
    match phase {
        PacerPhase::Idle => "idle",
        PacerPhase::Paused => "paused",
        PacerPhase::Playing => "playing",
    }
}

fn notice_label(notice: &Notice) -> Option<String> {
    match notice {
        Notice::None => None,
        Notice::Saving { id } => Some(format!("saving #{id}")),
        Notice::Saved { id } => Some(format!("saved #{id}")),
        Notice::SaveFailed { id, failure } => {
            Some(format!("save #{id} failed: {}", failure.detail()))
        }
    }
}

fn status_line(snapshot: &PacerSnapshot<'_>) -> String {
    let chunk = if snapshot.phase == PacerPhase::Idle {
        "(type: load <text>)"
    } else {
        snapshot.chunk
    };

    let mut line = format!(
        "[{}/{}] {} {} wpm | {}",
        snapshot.display_position(),
        snapshot.total_chunks,
        phase_label(snapshot.phase),
        snapshot.wpm,
        chunk
    );
    if let Some(notice) = notice_label(snapshot.notice) {
        let marker = if snapshot.notice.is_error() { "!" } else { "-" };
        line.push_str(&format!("  {marker} {notice}"));
    }
    line
}

fn fullscreen_view(snapshot: &PacerSnapshot<'_>) -> String {
    let action = if snapshot.playing { "pause" } else { "play" };
    let mut view = format!(
        "\n\n\n        {}\n\n\n  [p] prev   [enter] {}   [n] next   [fs] exit   {} wpm   {}/{}\n",
        snapshot.chunk,
        action,
        snapshot.wpm,
        snapshot.display_position(),
        snapshot.total_chunks
    );
    if snapshot.notice.is_error()
        && let Some(notice) = notice_label(snapshot.notice)
    {
        view.push_str(&format!("  ! {notice}\n"));
    }
    view
}

#[cfg(test)]
mod tests {
    use read_chunker_core::persistence::SaveFailure;

    use super::*;

    fn snapshot<'a>(notice: &'a Notice) -> PacerSnapshot<'a> {
        PacerSnapshot {
            chunk: "the quick brown",
            position: 2,
            total_chunks: 7,
            playing: true,
            wpm: 300,
            fullscreen: false,
            phase: PacerPhase::Playing,
            notice,
        }
    }

    #[test]
    fn parses_navigation_and_playback_commands() {
        assert_eq!(parse_command(""), Ok(Command::Intent(Intent::Toggle)));
        assert_eq!(parse_command("play"), Ok(Command::Intent(Intent::Play)));
        assert_eq!(parse_command("pause\r"), Ok(Command::Intent(Intent::Pause)));
        assert_eq!(parse_command("n"), Ok(Command::Intent(Intent::StepForward)));
        assert_eq!(parse_command("prev"), Ok(Command::Intent(Intent::StepBack)));
        assert_eq!(parse_command("fs"), Ok(Command::ToggleFullscreen));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn load_keeps_text_verbatim() {
        assert_eq!(
            parse_command("load a  b c "),
            Ok(Command::Intent(Intent::Load("a  b c ".into())))
        );
        assert_eq!(
            parse_command("load"),
            Ok(Command::Intent(Intent::Load(String::new())))
        );
    }

    #[test]
    fn speed_accepts_only_offered_values() {
        assert_eq!(
            parse_command("speed 700"),
            Ok(Command::Intent(Intent::SetSpeed(700)))
        );
        assert_eq!(parse_command("speed"), Err(CommandError::MissingSpeed));
        assert_eq!(
            parse_command("speed 350"),
            Err(CommandError::UnsupportedSpeed("350".into()))
        );
        assert_eq!(
            CommandError::UnsupportedSpeed("350".into()).to_string(),
            "\"350\" is not offered; choose one of 200, 300, 400, 500, 600, 700"
        );
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        assert_eq!(
            parse_command("rewind"),
            Err(CommandError::Unknown("rewind".into()))
        );
    }

    #[test]
    fn status_line_shows_position_state_and_notice() {
        let notice = Notice::Saved { id: 3 };
        assert_eq!(
            status_line(&snapshot(&notice)),
            "[3/7] playing 300 wpm | the quick brown  - saved #3"
        );

        let notice = Notice::SaveFailed {
            id: 4,
            failure: SaveFailure::from_display(&"disk full"),
        };
        assert_eq!(
            status_line(&snapshot(&notice)),
            "[3/7] playing 300 wpm | the quick brown  ! save #4 failed: disk full"
        );
    }

    #[test]
    fn idle_status_line_prompts_for_text() {
        let notice = Notice::None;
        let idle = PacerSnapshot {
            chunk: "",
            position: 0,
            total_chunks: 0,
            playing: false,
            wpm: 200,
            fullscreen: false,
            phase: PacerPhase::Idle,
            notice: &notice,
        };
        assert_eq!(status_line(&idle), "[0/0] idle 200 wpm | (type: load <text>)");
    }

    #[test]
    fn fullscreen_view_shows_chunk_and_controls_only() {
        let notice = Notice::Saved { id: 1 };
        let view = fullscreen_view(&snapshot(&notice));
        assert!(view.contains("the quick brown"));
        assert!(view.contains("[enter] pause"));
        assert!(!view.contains("saved"));
    }
}
