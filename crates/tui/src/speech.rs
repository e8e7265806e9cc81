//! Spoken announcements through an external speech synthesiser.

use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{bail, Context, Result};
use bingo90_core::SpeechSettings;
use tracing::{debug, info};

const CANDIDATES: [&str; 3] = ["espeak-ng", "espeak", "say"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Espeak,
    Say,
    Plain,
}

impl Flavor {
    fn detect(program: &Path) -> Self {
        let name = program
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        if name.starts_with("espeak") {
            Flavor::Espeak
        } else if name == "say" {
            Flavor::Say
        } else {
            Flavor::Plain
        }
    }
}

/// Blocking text-to-speech front for a synthesiser binary.
#[derive(Debug, Clone)]
pub struct Speaker {
    backend: Option<(PathBuf, Flavor)>,
    rate: u32,
    volume: f32,
}

impl Speaker {
    /// Locate a synthesiser according to the settings.
    ///
    /// Fails when speech is enabled but no usable program can be found.
    pub fn from_settings(settings: &SpeechSettings) -> Result<Self> {
        if !settings.enabled {
            info!("Speech disabled by configuration");
            return Ok(Self::silent());
        }

        let program = match settings.command.as_deref() {
            Some(command) => find_program(command)
                .with_context(|| format!("configured speech command '{command}' not found"))?,
            None => CANDIDATES
                .iter()
                .find_map(|candidate| find_program(candidate))
                .context(
                    "no speech synthesiser found; install espeak-ng or set speech.enabled = false",
                )?,
        };
        let flavor = Flavor::detect(&program);
        info!(program = %program.display(), ?flavor, rate = settings.rate, volume = settings.volume, "Speech ready");

        Ok(Self {
            backend: Some((program, flavor)),
            rate: settings.rate,
            volume: settings.volume,
        })
    }

    /// Speaker that never produces sound.
    pub fn silent() -> Self {
        Self {
            backend: None,
            rate: 0,
            volume: 0.0,
        }
    }

    /// Speak `text`, returning once the synthesiser exits.
    pub fn speak(&self, text: &str) -> Result<()> {
        let Some((program, flavor)) = &self.backend else {
            return Ok(());
        };
        let args = self.arguments(*flavor, text);
        debug!(program = %program.display(), ?args, "Speaking");

        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("failed to run {}", program.display()))?;
        if !status.success() {
            bail!("{} exited with {}", program.display(), status);
        }
        Ok(())
    }

    fn arguments(&self, flavor: Flavor, text: &str) -> Vec<String> {
        match flavor {
            Flavor::Espeak => vec![
                "-s".to_string(),
                self.rate.to_string(),
                "-a".to_string(),
                // espeak amplitude runs 0..=200 with 100 as the normal level.
                ((self.volume * 100.0).round() as u32).to_string(),
                text.to_string(),
            ],
            Flavor::Say => vec![
                "-r".to_string(),
                self.rate.to_string(),
                format!("[[volm {:.2}]] {text}", self.volume),
            ],
            Flavor::Plain => vec![text.to_string()],
        }
    }
}

fn find_program(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.components().count() > 1 {
        return direct.is_file().then(|| direct.to_path_buf());
    }
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(rate: u32, volume: f32) -> Speaker {
        Speaker {
            backend: None,
            rate,
            volume,
        }
    }

    #[test]
    fn flavor_follows_program_name() {
        assert_eq!(Flavor::detect(Path::new("/usr/bin/espeak-ng")), Flavor::Espeak);
        assert_eq!(Flavor::detect(Path::new("espeak")), Flavor::Espeak);
        assert_eq!(Flavor::detect(Path::new("/usr/bin/say")), Flavor::Say);
        assert_eq!(Flavor::detect(Path::new("festival")), Flavor::Plain);
    }

    #[test]
    fn espeak_arguments_carry_rate_and_amplitude() {
        let args = speaker(150, 1.0).arguments(Flavor::Espeak, "47");
        assert_eq!(args, vec!["-s", "150", "-a", "100", "47"]);
        let args = speaker(120, 0.25).arguments(Flavor::Espeak, "5");
        assert_eq!(args, vec!["-s", "120", "-a", "25", "5"]);
    }

    #[test]
    fn say_embeds_volume_in_text() {
        let args = speaker(150, 0.5).arguments(Flavor::Say, "12");
        assert_eq!(args, vec!["-r", "150", "[[volm 0.50]] 12"]);
    }

    #[test]
    fn disabled_speech_is_silent() -> Result<()> {
        let settings = SpeechSettings {
            enabled: false,
            ..SpeechSettings::default()
        };
        let speaker = Speaker::from_settings(&settings)?;
        speaker.speak("90")?;
        Ok(())
    }

    #[test]
    fn missing_configured_command_is_an_error() {
        let settings = SpeechSettings {
            command: Some("definitely-not-a-synthesiser-bingo90".to_string()),
            ..SpeechSettings::default()
        };
        assert!(Speaker::from_settings(&settings).is_err());
    }
}
