//! Multichannel record reading.
//!
//! Source records are interleaved little-endian `f64` frames, one sample per
//! channel per frame, with the standard 12-channel column order used by
//! PTB-XL exports: the four recorded leads I, II, V1 and V5 sit at columns
//! 0, 1, 6 and 10.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::CardiqError;
use crate::leads::RecordedLeads;

/// Column of lead I in a 12-channel record.
pub const LEAD_I_CHANNEL: usize = 0;
/// Column of lead II.
pub const LEAD_II_CHANNEL: usize = 1;
/// Column of lead V1.
pub const LEAD_V1_CHANNEL: usize = 6;
/// Column of lead V5.
pub const LEAD_V5_CHANNEL: usize = 10;

/// A multichannel sample record, stored column-major after reading.
///
/// All channels share one length by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRecord {
    channels: Vec<Vec<f64>>,
}

impl SignalRecord {
    /// Read interleaved little-endian `f64` frames until EOF.
    ///
    /// A byte count that is not a whole number of frames fails with
    /// [`CardiqError::TruncatedRecord`].
    pub fn from_reader<R: Read>(mut reader: R, channel_count: usize) -> Result<Self, CardiqError> {
        if channel_count == 0 {
            return Err(CardiqError::MissingChannel {
                index: 0,
                available: 0,
            });
        }

        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;

        let frame_bytes = channel_count * std::mem::size_of::<f64>();
        if raw.len() % frame_bytes != 0 {
            return Err(CardiqError::TruncatedRecord);
        }
        let frame_count = raw.len() / frame_bytes;

        let mut channels: Vec<Vec<f64>> = (0..channel_count)
            .map(|_| Vec::with_capacity(frame_count))
            .collect();
        let mut cursor = Cursor::new(raw);
        for _ in 0..frame_count {
            for channel in channels.iter_mut() {
                channel.push(cursor.read_f64::<LittleEndian>()?);
            }
        }

        Ok(Self { channels })
    }

    /// Read a record file.
    pub fn open<P: AsRef<Path>>(path: P, channel_count: usize) -> Result<Self, CardiqError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), channel_count)
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn sample_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// One column of the record.
    pub fn channel(&self, index: usize) -> Result<&[f64], CardiqError> {
        self.channels
            .get(index)
            .map(Vec::as_slice)
            .ok_or(CardiqError::MissingChannel {
                index,
                available: self.channels.len(),
            })
    }

    /// Extract the four recorded leads from their standard columns.
    pub fn recorded_leads(&self) -> Result<RecordedLeads, CardiqError> {
        Ok(RecordedLeads {
            lead_i: self.channel(LEAD_I_CHANNEL)?.to_vec(),
            lead_ii: self.channel(LEAD_II_CHANNEL)?.to_vec(),
            lead_v1: self.channel(LEAD_V1_CHANNEL)?.to_vec(),
            lead_v5: self.channel(LEAD_V5_CHANNEL)?.to_vec(),
        })
    }
}
