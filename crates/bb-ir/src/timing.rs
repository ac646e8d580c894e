//! Tempo timeline mapping between beats and wall-clock seconds.
//!
//! A [`TimingMap`] owns an ordered list of tempo change points. Each
//! point starts a constant-tempo segment running until the next point
//! (the last segment is unbounded), so time advances piecewise-linearly
//! with beat: `delta_time = delta_beat / tempo * 60`.

/// Base tempo of a default timing map, in beats per minute.
pub const DEFAULT_TEMPO: f32 = 120.0;

/// A point on the beat axis where the tempo changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TempoPoint {
    /// Beat this point sits on
    pub beat: f32,
    /// Tempo from this beat until the next point, in BPM
    pub tempo: f32,
}

/// Maps between musical position (beats) and wall-clock time (seconds)
/// under a sequence of tempo changes.
///
/// The point list is sorted ascending by beat, no two points share a
/// beat, and the first point always sits at beat 0 — it carries the
/// base tempo and is never removed. Operations panic if the list is
/// ever empty; that can only happen through a construction bug, not
/// through the editing API.
///
/// Conversions and edits are plain synchronous computations with no
/// internal locking. A map shared between an edit thread and a
/// playback thread needs external read-write discipline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingMap {
    offset: f32,
    points: Vec<TempoPoint>,
}

impl TimingMap {
    /// Create a timing map anchored at `offset` seconds with a single
    /// base tempo point at beat 0.
    pub fn new(offset: f32, base_tempo: f32) -> Self {
        Self {
            offset,
            points: vec![TempoPoint { beat: 0.0, tempo: base_tempo }],
        }
    }

    /// Wall-clock time of beat 0, in seconds.
    ///
    /// Negative when the audio starts before the first beat, positive
    /// when the track opens with silence.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Move the wall-clock anchor of beat 0.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// The tempo change points, sorted ascending by beat.
    ///
    /// `points()[0].beat == 0` always holds.
    pub fn points(&self) -> &[TempoPoint] {
        &self.points
    }

    fn base(&self) -> TempoPoint {
        self.points[0]
    }

    /// Convert a wall-clock time in seconds to a beat position.
    ///
    /// Times at or before the offset extrapolate backward from beat 0
    /// at the base tempo, yielding negative beats. An instant that
    /// lands exactly on a segment boundary resolves to that boundary's
    /// beat; instants strictly inside a segment are priced at that
    /// segment's tempo.
    pub fn beat_at(&self, time: f32) -> f32 {
        let base = self.base();
        if time <= self.offset {
            return (time - self.offset) / (base.tempo / 60.0);
        }

        let mut current_time = self.offset;
        let mut previous_time = self.offset;
        let mut previous_beat = base.beat;
        let mut previous_tempo = base.tempo;

        for point in &self.points {
            current_time += (point.beat - previous_beat) / previous_tempo * 60.0;
            // Only a segment starting strictly later stops the walk; a
            // start landing exactly on `time` still counts as reached.
            if current_time > time {
                break;
            }

            previous_beat = point.beat;
            previous_tempo = point.tempo;
            previous_time = current_time;
        }

        previous_beat + (time - previous_time) / 60.0 * previous_tempo
    }

    /// Convert a beat position to a wall-clock time in seconds.
    ///
    /// Beats at or before 0 extrapolate backward at the base tempo.
    pub fn time_at(&self, beat: f32) -> f32 {
        let base = self.base();
        if beat <= 0.0 {
            return beat / base.tempo * 60.0 + self.offset;
        }

        let mut time = self.offset;
        let mut previous_beat = base.beat;
        let mut previous_tempo = base.tempo;

        for point in &self.points {
            if point.beat > beat {
                break;
            }

            time += (point.beat - previous_beat) / previous_tempo * 60.0;
            previous_beat = point.beat;
            previous_tempo = point.tempo;
        }

        time + (beat - previous_beat) / previous_tempo * 60.0
    }

    /// Tempo in effect at `beat`: the tempo of the last point whose
    /// beat is at or before it.
    ///
    /// Returns `0.0` when no point qualifies, which only happens for
    /// beats before 0.
    pub fn tempo_at(&self, beat: f32) -> f32 {
        self.points
            .iter()
            .rev()
            .find(|point| point.beat <= beat)
            .map_or(0.0, |point| point.tempo)
    }

    /// Set the tempo from `beat` onward.
    ///
    /// A negative beat or tempo is ignored. `beat == 0` overwrites the
    /// base tempo in place. Otherwise the point at `beat` is updated,
    /// created, or — when the new tempo matches the preceding
    /// segment's — removed so the two segments merge. Re-stating the
    /// surrounding segment's tempo where no point exists adds nothing.
    ///
    /// A tempo of exactly 0 is accepted; conversions across a stopped
    /// segment divide by zero.
    pub fn set_tempo(&mut self, beat: f32, tempo: f32) {
        if tempo < 0.0 || beat < 0.0 {
            return;
        }
        if beat == 0.0 {
            self.points[0].tempo = tempo;
            return;
        }

        // Index of the first point past `beat`. At least 1, since the
        // base point at beat 0 never compares greater.
        let next = self.points.partition_point(|point| point.beat <= beat);
        let at = next - 1;

        if self.points[at].beat == beat {
            if self.points[at - 1].tempo == tempo {
                self.points.remove(at);
            } else {
                self.points[at].tempo = tempo;
            }
        } else if self.points[at].tempo != tempo {
            self.points.insert(next, TempoPoint { beat, tempo });
        }
    }
}

impl Default for TimingMap {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_TEMPO)
    }
}
