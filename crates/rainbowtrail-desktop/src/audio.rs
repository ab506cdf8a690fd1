use rainbowtrail_core::chime::{Chime, SAMPLE_RATE};
use rainbowtrail_platform::{AudioSink, Result, SilentAudio};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle};
use tracing::{info, warn};

/// Plays the chime on the default output device.
pub struct RodioAudio {
    // Dropping the stream silences the device.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    samples: Vec<f32>,
}

impl RodioAudio {
    pub fn open(chime: Chime) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            samples: chime.samples(SAMPLE_RATE),
        })
    }
}

impl AudioSink for RodioAudio {
    fn play_chime(&mut self) -> Result<()> {
        let source = SamplesBuffer::new(1, SAMPLE_RATE, self.samples.clone());
        self.handle.play_raw(source)?;
        Ok(())
    }
}

/// Default output device, or silence when there is none.
pub fn open_audio() -> Box<dyn AudioSink> {
    match RodioAudio::open(Chime::default()) {
        Ok(audio) => {
            info!("audio output ready");
            Box::new(audio)
        }
        Err(err) => {
            warn!("no audio output, chime disabled: {err}");
            Box::new(SilentAudio)
        }
    }
}
