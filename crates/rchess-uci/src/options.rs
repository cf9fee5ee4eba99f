//! UCI option registry.
//!
//! Named, typed, bounded settings declared once at startup and updated over
//! the session by the GUI. The registry keys options case-insensitively,
//! remembers declaration order for printing, and renders itself in either
//! the UCI or the XBoard dialect depending on the current value of the
//! `Protocol` option.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Change hook invoked with an option's state after a successful update.
pub type OnChange = Box<dyn Fn(&UciOption)>;

/// Ordinal comparison after ASCII case-folding. The protocol treats option
/// names as case-insensitive.
pub fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Option name retaining its declared spelling; equality and ordering are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct OptionName(String);

impl OptionName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl PartialEq for OptionName {
    fn eq(&self, other: &Self) -> bool {
        caseless_cmp(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for OptionName {}

impl PartialOrd for OptionName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OptionName {
    fn cmp(&self, other: &Self) -> Ordering {
        caseless_cmp(&self.0, &other.0)
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-kind data. Spin values are held as floats and truncated toward zero
/// only when printed.
enum Value {
    Str {
        default: String,
        current: String,
    },
    Check {
        default: bool,
        current: bool,
    },
    Spin {
        default: f64,
        current: f64,
        min: i64,
        max: i64,
    },
    Combo {
        default: String,
        current: String,
        choices: Vec<String>,
    },
    Button,
}

pub struct UciOption {
    value: Value,
    idx: usize,
    on_change: Option<OnChange>,
}

impl UciOption {
    pub fn string(default: &str) -> Self {
        Self::with(Value::Str {
            default: default.to_string(),
            current: default.to_string(),
        })
    }

    pub fn check(default: bool) -> Self {
        Self::with(Value::Check {
            default,
            current: default,
        })
    }

    /// Bounded numeric option.
    pub fn spin(default: f64, min: i64, max: i64) -> Self {
        assert!(
            min <= max && min as f64 <= default && default <= max as f64,
            "spin default {default} outside [{min}, {max}]"
        );
        Self::with(Value::Spin {
            default,
            current: default,
            min,
            max,
        })
    }

    /// Enumerated option. The default must be one of the choices.
    pub fn combo(default: &str, choices: &[&str]) -> Self {
        assert!(
            choices.iter().any(|c| *c == default),
            "combo default '{default}' not among its choices"
        );
        Self::with(Value::Combo {
            default: default.to_string(),
            current: default.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
        })
    }

    /// Stateless trigger.
    pub fn button() -> Self {
        Self::with(Value::Button)
    }

    fn with(value: Value) -> Self {
        Self {
            value,
            idx: 0,
            on_change: None,
        }
    }

    /// Attach the hook fired after each successful update.
    pub fn on_change(mut self, f: impl Fn(&UciOption) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Registration index: position in declaration order, fixed for the
    /// lifetime of the registry.
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Wire tag for this option's kind.
    pub fn type_tag(&self) -> &'static str {
        match self.value {
            Value::Str { .. } => "string",
            Value::Check { .. } => "check",
            Value::Spin { .. } => "spin",
            Value::Combo { .. } => "combo",
            Value::Button => "button",
        }
    }

    /// Numeric view: the current value of a spin, 1/0 for a check. Calling
    /// this on any other kind is a bug in the caller.
    pub fn as_f64(&self) -> f64 {
        match &self.value {
            Value::Spin { current, .. } => *current,
            Value::Check { current, .. } => {
                if *current {
                    1.0
                } else {
                    0.0
                }
            }
            _ => panic!("numeric access on a {} option", self.type_tag()),
        }
    }

    /// Boolean view of a check or spin option.
    pub fn as_bool(&self) -> bool {
        self.as_f64() != 0.0
    }

    /// Text view of a string or combo option.
    pub fn as_str(&self) -> &str {
        match &self.value {
            Value::Str { current, .. } | Value::Combo { current, .. } => current,
            _ => panic!("text access on a {} option", self.type_tag()),
        }
    }

    /// Case-insensitive equality of a combo's current value against a
    /// literal. Note the asymmetry with [`UciOption::set`], whose
    /// membership test is case-sensitive.
    pub fn matches(&self, literal: &str) -> bool {
        match &self.value {
            Value::Combo { current, .. } => caseless_cmp(current, literal) == Ordering::Equal,
            _ => panic!("combo comparison on a {} option", self.type_tag()),
        }
    }

    /// Apply a value received from the GUI. The GUI is expected to stay
    /// within the advertised bounds, but console input may not, so bounds
    /// are checked here and out-of-protocol input is dropped without
    /// touching the option or firing the hook.
    pub fn set(&mut self, new_value: &str) {
        if !matches!(self.value, Value::Button) && new_value.is_empty() {
            return;
        }

        match &mut self.value {
            Value::Str { current, .. } => *current = new_value.to_string(),
            Value::Check { current, .. } => match new_value {
                "true" => *current = true,
                "false" => *current = false,
                _ => return,
            },
            Value::Spin {
                current, min, max, ..
            } => {
                let Ok(v) = new_value.parse::<f64>() else {
                    return;
                };
                if v < *min as f64 || v > *max as f64 {
                    return;
                }
                *current = v;
            }
            Value::Combo {
                current, choices, ..
            } => {
                if !choices.iter().any(|c| c == new_value) {
                    return;
                }
                *current = new_value.to_string();
            }
            Value::Button => {}
        }

        if let Some(f) = &self.on_change {
            f(self);
        }
    }
}

/// Ordered collection of engine options keyed by case-insensitive name.
///
/// Lookup goes through the name ordering; printing goes through the
/// registration index, which records declaration order and never changes.
#[derive(Default)]
pub struct OptionsMap {
    options: BTreeMap<OptionName, UciOption>,
    next_idx: usize,
}

impl OptionsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option. Names must be unique up to ASCII case; a
    /// collision is a bug in the declaring code.
    pub fn add(&mut self, name: &str, mut option: UciOption) {
        option.idx = self.next_idx;
        self.next_idx += 1;
        let previous = self.options.insert(OptionName::from(name), option);
        assert!(previous.is_none(), "option '{name}' declared twice");
    }

    pub fn get(&self, name: &str) -> Option<&UciOption> {
        self.options.get(&OptionName::from(name))
    }

    /// Apply a GUI-supplied value to the named option. Returns whether the
    /// name resolved; invalid values are dropped silently (see
    /// [`UciOption::set`]).
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.options.get_mut(&OptionName::from(name)) {
            Some(option) => {
                option.set(value);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// All options in declaration order, independently of the map's own
    /// alphabetic ordering.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UciOption)> {
        let mut entries: Vec<_> = self
            .options
            .iter()
            .map(|(name, option)| (name.as_str(), option))
            .collect();
        entries.sort_by_key(|(_, option)| option.idx);
        entries.into_iter()
    }
}

/// Renders every option except `Protocol` itself, in declaration order, in
/// the dialect selected by the `Protocol` option's current value.
impl fmt::Display for OptionsMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xboard = self.get("Protocol").is_some_and(|o| o.matches("xboard"));

        for (name, option) in self.iter() {
            if caseless_cmp(name, "Protocol") == Ordering::Equal {
                continue;
            }
            if xboard {
                write_xboard(f, name, option)?;
            } else {
                write_uci(f, name, option)?;
            }
        }
        Ok(())
    }
}

fn write_uci(f: &mut fmt::Formatter<'_>, name: &str, option: &UciOption) -> fmt::Result {
    write!(f, "\noption name {} type {}", name, option.type_tag())?;
    match &option.value {
        Value::Str { default, .. } => write!(f, " default {default}"),
        Value::Check { default, .. } => write!(f, " default {default}"),
        Value::Combo {
            default, choices, ..
        } => {
            write!(f, " default {default}")?;
            for choice in choices {
                write!(f, " var {choice}")?;
            }
            Ok(())
        }
        Value::Spin {
            default, min, max, ..
        } => write!(f, " default {} min {} max {}", *default as i64, min, max),
        Value::Button => Ok(()),
    }
}

fn write_xboard(f: &mut fmt::Formatter<'_>, name: &str, option: &UciOption) -> fmt::Result {
    write!(f, "\nfeature option=\"{} -{}", name, option.type_tag())?;
    match &option.value {
        Value::Str { default, .. } => write!(f, " {default}")?,
        Value::Check { default, .. } => write!(f, " {}", u8::from(*default))?,
        Value::Combo {
            default, choices, ..
        } => {
            write!(f, " {default}")?;
            for choice in choices.iter().filter(|c| *c != default) {
                write!(f, " /// {choice}")?;
            }
        }
        Value::Spin {
            default, min, max, ..
        } => write!(f, " {} {} {}", *default as i64, min, max)?,
        Value::Button => {}
    }
    write!(f, "\"")
}
