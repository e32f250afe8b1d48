// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped ownership of a camera stream.
//!
//! A [`CaptureSession`] holds the stream for as long as the capture surface
//! is open. Every track is stopped when the session is dropped, when the
//! camera facing is switched, and when the session is closed explicitly.

use std::fmt;

use crate::error::Result;

/// Which camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Front camera.
    User,
    /// Rear camera.
    Environment,
}

impl Facing {
    pub fn flipped(self) -> Facing {
        match self {
            Facing::User => Facing::Environment,
            Facing::Environment => Facing::User,
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::User => write!(f, "user"),
            Facing::Environment => write!(f, "environment"),
        }
    }
}

/// One track of a media stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub label: String,
    live: bool,
}

impl Track {
    pub fn new(label: impl Into<String>) -> Self {
        Track {
            label: label.into(),
            live: true,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn stop(&mut self) {
        self.live = false;
    }
}

/// An acquired camera stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStream {
    pub facing: Facing,
    pub tracks: Vec<Track>,
}

impl MediaStream {
    pub fn new(facing: Facing, tracks: Vec<Track>) -> Self {
        MediaStream { facing, tracks }
    }

    pub fn stop_all(&mut self) {
        for track in &mut self.tracks {
            track.stop();
        }
    }

    pub fn is_live(&self) -> bool {
        self.tracks.iter().any(Track::is_live)
    }
}

/// A device that hands out camera streams.
///
/// `acquire` must not leave any track running when it returns an error.
pub trait MediaSource {
    fn acquire(&mut self, facing: Facing) -> Result<MediaStream>;

    /// Gives a stream back to the device. Called once per acquired stream.
    fn release(&mut self, stream: MediaStream);
}

/// Exclusive use of the camera while the capture surface is open.
pub struct CaptureSession<'a, S: MediaSource> {
    source: &'a mut S,
    stream: Option<MediaStream>,
}

impl<'a, S: MediaSource> CaptureSession<'a, S> {
    /// Opens the camera. On error nothing is held.
    pub fn open(source: &'a mut S, facing: Facing) -> Result<Self> {
        let stream = source.acquire(facing)?;
        Ok(CaptureSession {
            source,
            stream: Some(stream),
        })
    }

    /// The live stream, or `None` after a failed facing switch.
    pub fn stream(&self) -> Option<&MediaStream> {
        self.stream.as_ref()
    }

    /// Releases the current stream, then opens the other camera.
    ///
    /// If the other camera cannot be opened the session is left without a
    /// stream and the error is returned.
    pub fn switch_facing(&mut self) -> Result<()> {
        let facing = match self.stream.take() {
            Some(stream) => {
                let facing = stream.facing.flipped();
                self.release(stream);
                facing
            }
            None => Facing::Environment,
        };
        self.stream = Some(self.source.acquire(facing)?);
        Ok(())
    }

    /// Closes the capture surface.
    pub fn close(mut self) {
        if let Some(stream) = self.stream.take() {
            self.release(stream);
        }
    }

    fn release(&mut self, mut stream: MediaStream) {
        stream.stop_all();
        self.source.release(stream);
    }
}

impl<S: MediaSource> Drop for CaptureSession<'_, S> {
    fn drop(&mut self) {
        if let Some(stream) = self.stream.take() {
            self.release(stream);
        }
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
