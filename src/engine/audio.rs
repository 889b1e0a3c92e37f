//! Sound effects and background music through rodio.
//!
//! Audio is best effort: without an output device or with missing files the
//! game keeps running silently.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Score,
    Step,
    Die,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Score, SoundEffect::Step, SoundEffect::Die];

    pub fn asset_path(self) -> &'static str {
        match self {
            SoundEffect::Score => "data/score.wav",
            SoundEffect::Step => "data/step.wav",
            SoundEffect::Die => "data/die.wav",
        }
    }
}

pub const MUSIC_PATH: &str = "data/Malloga_Ballinga_Mastered_mp_0.mp3";

/// Encoded sound files kept in memory, decoded again per playback.
#[derive(Debug, Default, Clone)]
pub struct SoundBank {
    score: Option<Arc<[u8]>>,
    step: Option<Arc<[u8]>>,
    die: Option<Arc<[u8]>>,
    music: Option<Arc<[u8]>>,
}

impl SoundBank {
    pub fn load(asset_dir: &Path) -> Self {
        let read = |rel: &str| -> Option<Arc<[u8]>> {
            let path = asset_dir.join(rel);
            match std::fs::read(&path) {
                Ok(bytes) => Some(bytes.into()),
                Err(e) => {
                    warn!("Sound {} unavailable: {}", path.display(), e);
                    None
                }
            }
        };
        Self {
            score: read(SoundEffect::Score.asset_path()),
            step: read(SoundEffect::Step.asset_path()),
            die: read(SoundEffect::Die.asset_path()),
            music: read(MUSIC_PATH),
        }
    }

    pub fn effect(&self, effect: SoundEffect) -> Option<&Arc<[u8]>> {
        match effect {
            SoundEffect::Score => self.score.as_ref(),
            SoundEffect::Step => self.step.as_ref(),
            SoundEffect::Die => self.die.as_ref(),
        }
    }

    pub fn music(&self) -> Option<&Arc<[u8]>> {
        self.music.as_ref()
    }
}

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    _music: Option<Sink>,
    bank: SoundBank,
}

impl Audio {
    pub fn new(bank: SoundBank, music_volume: f32) -> Result<Self, Box<dyn std::error::Error>> {
        let (stream, handle) = OutputStream::try_default()?;

        let music = bank.music().and_then(|bytes| {
            let sink = Sink::try_new(&handle).ok()?;
            let source = Decoder::new(Cursor::new(bytes.clone()))
                .map_err(|e| warn!("Failed to decode music: {}", e))
                .ok()?;
            sink.set_volume(music_volume);
            sink.append(source.repeat_infinite());
            info!("Music playing at volume {}", music_volume);
            Some(sink)
        });

        Ok(Self {
            _stream: stream,
            handle,
            _music: music,
            bank,
        })
    }

    pub fn play(&self, effect: SoundEffect) {
        let Some(bytes) = self.bank.effect(effect) else {
            return;
        };
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) else {
            debug!("Failed to decode {:?}", effect);
            return;
        };
        sink.append(source);
        sink.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_gives_empty_bank() {
        let bank = SoundBank::load(Path::new("no/such/assets"));
        for effect in SoundEffect::ALL {
            assert!(bank.effect(effect).is_none());
        }
        assert!(bank.music().is_none());
    }

    #[test]
    fn bank_reads_files_under_their_asset_names() {
        let dir = std::env::temp_dir().join(format!("star-collector-sounds-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("data")).unwrap();
        std::fs::write(dir.join(MUSIC_PATH), b"music").unwrap();
        std::fs::write(dir.join(SoundEffect::Step.asset_path()), b"step").unwrap();

        let bank = SoundBank::load(&dir);
        assert_eq!(bank.music().map(|b| &b[..]), Some(&b"music"[..]));
        assert_eq!(bank.effect(SoundEffect::Step).map(|b| &b[..]), Some(&b"step"[..]));
        assert!(bank.effect(SoundEffect::Die).is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
