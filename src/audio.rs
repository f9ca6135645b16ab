use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

const SAMPLE_RATE: u32 = 44_100;
const TAP_FREQ_HZ: f32 = 880.0;
const TAP_DURATION: f32 = 0.06;

/// Fire-and-forget sound output. Holding the stream keeps the device open
/// for the lifetime of the app; sinks are detached per effect.
pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Short blip on a landed tap. No return value; a sink that cannot be
    /// created simply drops the effect.
    pub fn play_tap(&self) {
        self.play_samples(tap_samples(SAMPLE_RATE));
    }

    fn play_samples(&self, samples: Vec<f32>) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            let source = SamplesBuffer::new(1, SAMPLE_RATE, samples);
            sink.append(source);
            sink.detach();
        }
    }
}

/// Sine burst with an exponential decay envelope.
fn tap_samples(sample_rate: u32) -> Vec<f32> {
    let sample_count = (sample_rate as f32 * TAP_DURATION) as usize;
    let mut samples = Vec::with_capacity(sample_count);

    for i in 0..sample_count {
        let t = i as f32 / sample_rate as f32;
        let envelope = 0.2 * (-t * 60.0).exp();
        samples.push(envelope * (t * TAP_FREQ_HZ * std::f32::consts::TAU).sin());
    }

    samples
}
