use anyhow::{Context, Result, bail};
use macroquad::input::KeyCode;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            title: "tilewalk".to_owned(),
            width: 640,
            height: 360,
            fullscreen: false,
        }
    }
}

/// Key names as written in the settings file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Controls {
    pub left: String,
    pub left_alt: String,
    pub right: String,
    pub right_alt: String,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            left: "A".to_owned(),
            left_alt: "Left".to_owned(),
            right: "D".to_owned(),
            right_alt: "Right".to_owned(),
        }
    }
}

/// Controls resolved to key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub left: KeyCode,
    pub left_alt: KeyCode,
    pub right: KeyCode,
    pub right_alt: KeyCode,
}

impl Controls {
    pub fn bindings(&self) -> Result<Bindings> {
        Ok(Bindings {
            left: parse_key(&self.left).context("controls.left")?,
            left_alt: parse_key(&self.left_alt).context("controls.left_alt")?,
            right: parse_key(&self.right).context("controls.right")?,
            right_alt: parse_key(&self.right_alt).context("controls.right_alt")?,
        })
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub controls: Controls,
    pub map: PathBuf,
    pub debug_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowSettings::default(),
            controls: Controls::default(),
            map: PathBuf::from("./assets/maps/level_1.json"),
            debug_overlay: true,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults if the file does
    /// not exist. A file that exists but does not parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Settings> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("{} not found, using default settings", path.display());
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("open settings {}", path.display()));
            }
        };

        let settings: Settings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse settings {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Parses a key name such as `"A"`, `"left"` or `"Space"`, ignoring case.
pub fn parse_key(name: &str) -> Result<KeyCode> {
    let lower = name.trim().to_ascii_lowercase();

    if let [c] = lower.as_bytes() {
        if let Some(key) = letter_or_digit(*c) {
            return Ok(key);
        }
    }

    let key = match lower.as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Space,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "leftshift" => KeyCode::LeftShift,
        "rightshift" => KeyCode::RightShift,
        "leftcontrol" => KeyCode::LeftControl,
        "rightcontrol" => KeyCode::RightControl,
        "leftalt" => KeyCode::LeftAlt,
        "rightalt" => KeyCode::RightAlt,
        _ => bail!("unknown key name {:?}", name),
    };
    Ok(key)
}

fn letter_or_digit(c: u8) -> Option<KeyCode> {
    let key = match c {
        b'a' => KeyCode::A,
        b'b' => KeyCode::B,
        b'c' => KeyCode::C,
        b'd' => KeyCode::D,
        b'e' => KeyCode::E,
        b'f' => KeyCode::F,
        b'g' => KeyCode::G,
        b'h' => KeyCode::H,
        b'i' => KeyCode::I,
        b'j' => KeyCode::J,
        b'k' => KeyCode::K,
        b'l' => KeyCode::L,
        b'm' => KeyCode::M,
        b'n' => KeyCode::N,
        b'o' => KeyCode::O,
        b'p' => KeyCode::P,
        b'q' => KeyCode::Q,
        b'r' => KeyCode::R,
        b's' => KeyCode::S,
        b't' => KeyCode::T,
        b'u' => KeyCode::U,
        b'v' => KeyCode::V,
        b'w' => KeyCode::W,
        b'x' => KeyCode::X,
        b'y' => KeyCode::Y,
        b'z' => KeyCode::Z,
        b'0' => KeyCode::Key0,
        b'1' => KeyCode::Key1,
        b'2' => KeyCode::Key2,
        b'3' => KeyCode::Key3,
        b'4' => KeyCode::Key4,
        b'5' => KeyCode::Key5,
        b'6' => KeyCode::Key6,
        b'7' => KeyCode::Key7,
        b'8' => KeyCode::Key8,
        b'9' => KeyCode::Key9,
        _ => return None,
    };
    Some(key)
}
