// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing rendered canvases to disk, either as a single image or as
//! a numbered sequence of frames that shows the fractal growing.

use image::RgbImage;
use std::fs;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::error::{FractalError, Result};

/// Saves an image.  The format follows the file extension.
pub fn write_image(path: &Path, image: &RgbImage) -> Result<()> {
    image
        .save(path)
        .map_err(|e| FractalError::Output(format!("{}: {}", path.display(), e)))
}

/// Where frame number `frame` of a sequence lives inside `directory`.
pub fn frame_path(directory: &Path, frame: u64) -> PathBuf {
    directory.join(format!("frame-{:06}.png", frame))
}

/// Collects frame snapshots and writes them out in batches, spreading
/// each batch over several threads.  Encoding is by far the slowest
/// part of producing a frame sequence.
#[derive(Debug)]
pub struct FrameWriter {
    directory: PathBuf,
    threads: usize,
    batch_size: usize,
    pending: Vec<(u64, RgbImage)>,
    written: u64,
}

impl FrameWriter {
    /// Creates `directory` if needed.  `threads` is clamped to at
    /// least one.
    pub fn new<P: Into<PathBuf>>(directory: P, threads: usize) -> Result<FrameWriter> {
        let directory = directory.into();
        fs::create_dir_all(&directory)
            .map_err(|e| FractalError::Output(format!("{}: {}", directory.display(), e)))?;
        let threads = threads.max(1);
        Ok(FrameWriter {
            directory,
            threads,
            batch_size: threads * 4,
            pending: vec![],
            written: 0,
        })
    }

    /// Frames successfully written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Queues one frame, writing the batch once it is full.
    pub fn push(&mut self, frame: u64, image: RgbImage) -> Result<()> {
        self.pending.push((frame, image));
        if self.pending.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Writes every queued frame.  Reports the first failure, if any,
    /// after all threads have finished.
    pub fn flush(&mut self) -> Result<()> {
        let batch = mem::replace(&mut self.pending, vec![]);
        if batch.is_empty() {
            return Ok(());
        }
        let count = batch.len();
        let workers = self.threads.min(count);
        let directory = self.directory.as_path();
        let work = Arc::new(Mutex::new(batch.into_iter()));

        let failures: Vec<FractalError> = crossbeam::scope(|spawner| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let work = work.clone();
                    spawner.spawn(move |_| {
                        let mut failures = vec![];
                        loop {
                            let next = match work.lock() {
                                Ok(mut frames) => frames.next(),
                                Err(_) => None,
                            };
                            match next {
                                Some((frame, image)) => {
                                    let path = frame_path(directory, frame);
                                    if let Err(e) = write_image(&path, &image) {
                                        failures.push(e);
                                    }
                                }
                                None => {
                                    break;
                                }
                            }
                        }
                        failures
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        vec![FractalError::Output("frame writer thread panicked".to_string())]
                    })
                })
                .collect()
        })
        .map_err(|_| FractalError::Output("frame writer panicked".to_string()))?;

        self.written += (count - failures.len()) as u64;
        debug!(count, workers, written = self.written, "frame batch written");
        match failures.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Writes whatever is left and reports the total written.
    pub fn finish(mut self) -> Result<u64> {
        self.flush()?;
        Ok(self.written)
    }
}
