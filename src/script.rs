//! Line-oriented command scripts driving a form of IPv4 fields.
//!
//! One command per line; blank lines and `#` comments are skipped. Slots are
//! numbered 1 to 4, as the octets read left to right.

use ipv4_input::{FieldConfig, FieldId, Form, Key, Modifiers, Response, SubmitOutcome};
use octet_core::{SLOT_COUNT, SlotIndex};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Field { name: String, initial: String },
    Use(String),
    Type { slot: SlotIndex, text: String },
    Key { slot: SlotIndex, key: Key, modifiers: Modifiers },
    Paste { slot: SlotIndex, text: String },
    Blur(SlotIndex),
    Set(String),
    Submit,
    Reset,
    Tick,
    Show,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    BadSlot(String),
    UnknownKey(String),
    UnknownModifier(String),
    UnknownField(String),
    NoActiveField,
}

/// A script failure, tagged with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            ErrorKind::MissingArgument(what) => write!(f, "missing {what}"),
            ErrorKind::UnexpectedArgument(arg) => write!(f, "unexpected argument `{arg}`"),
            ErrorKind::BadSlot(s) => write!(f, "slot must be 1..={SLOT_COUNT}, got `{s}`"),
            ErrorKind::UnknownKey(k) => write!(f, "unknown key `{k}`"),
            ErrorKind::UnknownModifier(m) => write!(f, "unknown modifier `{m}`"),
            ErrorKind::UnknownField(name) => write!(f, "no field named `{name}`"),
            ErrorKind::NoActiveField => f.write_str("no field declared yet"),
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ScriptError {}

/// Parse a whole script into `(line, command)` pairs.
///
/// Stops at the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let cmd = parse_command(text).map_err(|kind| ScriptError { line, kind })?;
        commands.push((line, cmd));
    }
    Ok(commands)
}

/// Parse one non-empty, non-comment line.
pub fn parse_command(text: &str) -> Result<Command, ErrorKind> {
    let (word, rest) = split_word(text);
    let cmd = match word {
        "field" => {
            let (name, rest) = split_word(rest);
            if name.is_empty() {
                return Err(ErrorKind::MissingArgument("field name"));
            }
            Command::Field {
                name: name.to_string(),
                initial: unquote(rest).to_string(),
            }
        }
        "use" => {
            let (name, rest) = split_word(rest);
            if name.is_empty() {
                return Err(ErrorKind::MissingArgument("field name"));
            }
            no_more(rest)?;
            Command::Use(name.to_string())
        }
        "type" => {
            let (slot, rest) = slot_arg(rest)?;
            Command::Type {
                slot,
                text: unquote(rest).to_string(),
            }
        }
        "paste" => {
            let (slot, rest) = slot_arg(rest)?;
            Command::Paste {
                slot,
                text: unquote(rest).to_string(),
            }
        }
        "key" => {
            let (slot, rest) = slot_arg(rest)?;
            let mut words = rest.split_whitespace();
            let name = words.next().ok_or(ErrorKind::MissingArgument("key name"))?;
            let key = Key::from_name(name).ok_or_else(|| ErrorKind::UnknownKey(name.to_string()))?;
            let mut modifiers = Modifiers::NONE;
            for m in words {
                match m.to_ascii_lowercase().as_str() {
                    "ctrl" => modifiers.ctrl = true,
                    "meta" | "cmd" => modifiers.meta = true,
                    "alt" => modifiers.alt = true,
                    "shift" => modifiers.shift = true,
                    _ => return Err(ErrorKind::UnknownModifier(m.to_string())),
                }
            }
            Command::Key {
                slot,
                key,
                modifiers,
            }
        }
        "blur" => {
            let (slot, rest) = slot_arg(rest)?;
            no_more(rest)?;
            Command::Blur(slot)
        }
        "set" => Command::Set(unquote(rest).to_string()),
        "submit" | "reset" | "tick" | "show" => {
            no_more(rest)?;
            match word {
                "submit" => Command::Submit,
                "reset" => Command::Reset,
                "tick" => Command::Tick,
                _ => Command::Show,
            }
        }
        other => return Err(ErrorKind::UnknownCommand(other.to_string())),
    };
    Ok(cmd)
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

fn unquote(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

fn no_more(rest: &str) -> Result<(), ErrorKind> {
    match rest.trim() {
        "" => Ok(()),
        extra => Err(ErrorKind::UnexpectedArgument(extra.to_string())),
    }
}

fn slot_arg(text: &str) -> Result<(SlotIndex, &str), ErrorKind> {
    let (word, rest) = split_word(text);
    if word.is_empty() {
        return Err(ErrorKind::MissingArgument("slot"));
    }
    let slot = word
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(SlotIndex::new)
        .ok_or_else(|| ErrorKind::BadSlot(word.to_string()))?;
    Ok((slot, rest))
}

/// A form plus the field that commands currently target.
#[derive(Debug, Default)]
pub struct Session {
    form: Form,
    active: Option<FieldId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Run one command and return the lines it prints.
    pub fn execute(&mut self, line: usize, cmd: &Command) -> Result<Vec<String>, ScriptError> {
        let err = |kind| ScriptError { line, kind };
        let mut out = Vec::new();

        match cmd {
            Command::Field { name, initial } => {
                let config = FieldConfig::new()
                    .with_id(name.as_str())
                    .with_name(name.as_str())
                    .with_initial_value(initial.as_str());
                self.active = Some(self.form.add_field(config));
            }
            Command::Use(name) => {
                let id = self
                    .form
                    .field_by_name(name)
                    .ok_or_else(|| err(ErrorKind::UnknownField(name.clone())))?;
                self.active = Some(id);
            }
            Command::Submit => {
                out.push(match self.form.submit() {
                    SubmitOutcome::Submitted { entries } => {
                        let pairs: Vec<String> =
                            entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
                        format!("submitted [{}]", pairs.join(", "))
                    }
                    SubmitOutcome::Blocked {
                        field,
                        slot,
                        message,
                        ..
                    } => {
                        let name = self
                            .form
                            .field(field)
                            .and_then(|f| f.config().name.clone())
                            .unwrap_or_default();
                        format!("blocked {name} slot {}: {message}", slot.ordinal())
                    }
                });
            }
            Command::Reset => self.form.reset(),
            Command::Tick => {
                let ran = self.form.run_deferred();
                out.push(format!("ran {ran} deferred task(s)"));
            }
            Command::Show => {}
            other => {
                let id = self.active.ok_or_else(|| err(ErrorKind::NoActiveField))?;
                let field = self
                    .form
                    .field_mut(id)
                    .ok_or_else(|| err(ErrorKind::NoActiveField))?;
                let resp = match other {
                    Command::Type { slot, text } => field.type_text(*slot, text),
                    Command::Key {
                        slot,
                        key,
                        modifiers,
                    } => field.on_keystroke(*slot, *key, *modifiers),
                    Command::Paste { slot, text } => field.on_paste(*slot, text),
                    Command::Blur(slot) => field.on_blur(*slot),
                    Command::Set(value) => {
                        if let Err(e) = field.set_value(value) {
                            out.push(format!("rejected: {e}"));
                        }
                        Response::ACCEPT
                    }
                    _ => Response::ACCEPT,
                };
                if !resp.accepted {
                    out.push("default action suppressed".to_string());
                }
            }
        }

        out.extend(self.render());
        Ok(out)
    }

    /// State of the active field, one line.
    pub fn render(&self) -> Option<String> {
        let field = self.form.field(self.active?)?;
        let slots: Vec<String> = SlotIndex::ALL
            .iter()
            .map(|&slot| {
                let octet = field.slot(slot);
                let flag = if octet.has_error() { "!" } else { "" };
                format!("[{}]{flag}", octet.raw())
            })
            .collect();
        let focus = field
            .focused()
            .map_or_else(|| "-".to_string(), |s| s.ordinal().to_string());
        Some(format!(
            "{} {} focus={focus} mirror={:?}",
            field.config().name.as_deref().unwrap_or("?"),
            slots.join(" "),
            field.mirror().value()
        ))
    }
}
