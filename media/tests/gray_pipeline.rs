//! Public-API tests: a frame source feeding the grayscale converter.

use media::{FrameSource, MediaError, Result, VideoFrame, frame_to_gray};
use opencv::core::{CV_8UC3, Mat, Scalar};
use opencv::prelude::*;
use std::collections::VecDeque;

/// Source that plays back a fixed list of frames, then reports end of stream
struct Playback {
    frames: VecDeque<Mat>,
    released: u32,
}

impl Playback {
    fn new(colors: &[f64]) -> Self {
        let frames = colors
            .iter()
            .map(|&c| Mat::new_rows_cols_with_default(48, 64, CV_8UC3, Scalar::all(c)).unwrap())
            .collect();
        Self {
            frames,
            released: 0,
        }
    }
}

impl FrameSource for Playback {
    fn read_frame(&mut self) -> Result<VideoFrame> {
        self.frames
            .pop_front()
            .map(VideoFrame::new)
            .ok_or_else(|| MediaError::Camera("end of stream".to_string()))
    }

    fn release(&mut self) -> Result<()> {
        self.released += 1;
        Ok(())
    }
}

#[test]
fn test_every_frame_becomes_single_channel() {
    let mut source = Playback::new(&[0.0, 64.0, 255.0]);
    let mut grays = Vec::new();

    while let Ok(frame) = source.read_frame() {
        grays.push(frame_to_gray(&frame).unwrap());
    }
    source.release().unwrap();

    assert_eq!(grays.len(), 3);
    for gray in &grays {
        assert_eq!((gray.width(), gray.height(), gray.channels()), (64, 48, 1));
    }
    assert_eq!(source.released, 1);
}

#[test]
fn test_neutral_gray_input_keeps_its_level() {
    let mut source = Playback::new(&[64.0]);
    let gray = frame_to_gray(&source.read_frame().unwrap()).unwrap();

    // Equal B, G and R collapse to the same luma
    let bytes = gray.data().data_bytes().unwrap();
    assert_eq!(bytes.len(), 64 * 48);
    assert!(bytes.iter().all(|&p| p == 64));
}

#[test]
fn test_end_of_stream_is_a_camera_error() {
    let mut source = Playback::new(&[]);
    assert!(matches!(source.read_frame(), Err(MediaError::Camera(_))));
}
