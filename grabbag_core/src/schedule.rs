use std::collections::HashSet;

/// A span of minutes within a single day, half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: u32 = 0;
    /// One past the last minute of the day.
    pub const END_OF_DAY: u32 = 24 * 60;
    /// The full day, midnight to midnight.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::END_OF_DAY,
    };

    /// Builds the half-open range `[start, end)`.
    pub fn from_start_end(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Builds the range starting at `start` and lasting `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// A calendar entry that blocks its attendees for a span of the day.
#[derive(Debug, Clone)]
pub struct Event {
    pub title: String,
    pub when: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new(title: &str, when: TimeRange, attendees: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            when,
            attendees: attendees.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A meeting to be scheduled: who must attend, who should attend if
/// possible, and how many minutes are needed.
#[derive(Debug, Clone)]
pub struct MeetingRequest {
    pub attendees: HashSet<String>,
    pub optional_attendees: HashSet<String>,
    pub duration: u32,
}

impl MeetingRequest {
    pub fn new(attendees: &[&str], optional_attendees: &[&str], duration: u32) -> Self {
        Self {
            attendees: attendees.iter().map(|a| a.to_string()).collect(),
            optional_attendees: optional_attendees.iter().map(|a| a.to_string()).collect(),
            duration,
        }
    }
}

/// Finds every gap in the day long enough to hold the requested meeting.
///
/// Gaps are computed against the schedules of everyone named in the request,
/// required and optional attendees alike. If no gap fits the whole group,
/// the optional attendees are dropped and the gaps are recomputed against
/// the required attendees only: one slot that works for everyone beats many
/// slots that exclude the optional people.
///
/// Events attended by nobody in the request do not constrain the answer.
/// A request with no attendees at all is satisfiable anywhere, so the whole
/// day is returned; a zero-length or longer-than-a-day meeting fits nowhere.
pub fn find_meeting_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let required = &request.attendees;
    let optional = &request.optional_attendees;

    if required.is_empty() && optional.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }
    if request.duration == 0 || request.duration > TimeRange::WHOLE_DAY.duration() {
        return Vec::new();
    }

    let everyone: HashSet<&String> = required.iter().chain(optional.iter()).collect();
    let blocking_everyone: Vec<&Event> = events
        .iter()
        .filter(|e| e.attendees.iter().any(|a| everyone.contains(a)))
        .collect();

    let slots_for_everyone = find_gaps(&blocking_everyone, request.duration);
    if !slots_for_everyone.is_empty() {
        return slots_for_everyone;
    }

    // Nothing fits the whole group. With no required attendees there is no
    // smaller group to fall back to.
    if required.is_empty() {
        return Vec::new();
    }

    let blocking_required: Vec<&Event> = events
        .iter()
        .filter(|e| e.attendees.iter().any(|a| required.contains(a)))
        .collect();
    find_gaps(&blocking_required, request.duration)
}

/// Sweeps the day in event start order and collects every free span of at
/// least `duration` minutes between the busy blocks.
///
/// The cursor tracks the latest end time seen so far, so an event nested
/// inside an earlier, longer one does not reopen time that is still busy
/// (events ([5, 20), [10, 15)) leave gaps [0, 5) and [20, end), not
/// [15, end)).
fn find_gaps(busy: &[&Event], duration: u32) -> Vec<TimeRange> {
    let mut sorted = busy.to_vec();
    sorted.sort_by_key(|e| e.when.start());

    let mut gaps = Vec::new();
    let mut cursor = TimeRange::START_OF_DAY;
    for event in sorted {
        if event.when.start() > cursor {
            let gap = TimeRange::from_start_end(cursor, event.when.start());
            if gap.duration() >= duration {
                gaps.push(gap);
            }
        }
        cursor = cursor.max(event.when.end());
    }
    if cursor < TimeRange::END_OF_DAY {
        let gap = TimeRange::from_start_end(cursor, TimeRange::END_OF_DAY);
        if gap.duration() >= duration {
            gaps.push(gap);
        }
    }
    gaps
}
