//! List transforms
//!
//! Each transform clones what it keeps and returns a fresh [`List`].

use super::List;
use crate::parser::ast::Event;

impl List {
    /// Replace every clip-plus-dissolve pair with two plain clips
    ///
    /// A dissolve record always follows its incoming clip. The incoming clip
    /// is extended by the dissolve duration on both its source and record
    /// out-points; the dissolve's own fields become the outgoing clip, with
    /// `A` appended to its number. Extended ranges that now overlap their
    /// neighbours are left as they are.
    ///
    /// A dissolve that does not directly follow an unpaired event has no
    /// incoming clip and is dropped.
    #[must_use]
    pub fn without_dissolves(&self) -> Self {
        let events = &self.events;
        let mut out = Vec::with_capacity(events.len());
        let mut pairs = 0;
        let mut index = 0;

        while index < events.len() {
            let event = &events[index];
            let next = events.get(index + 1);

            if let Some(transition) = next.and_then(Event::transition) {
                let mut incoming = event.to_clip();
                incoming.source_end = incoming.source_end + transition.duration;
                incoming.record_end = incoming.record_end + transition.duration;

                let mut outgoing = events[index + 1].to_clip();
                outgoing.num.push('A');

                out.push(incoming);
                out.push(outgoing);
                pairs += 1;
                index += 2;
                continue;
            }

            if event.is_transition() {
                log::debug!("dissolve {} has no incoming clip", event.num);
            } else {
                out.push(event.clone());
            }
            index += 1;
        }

        log::debug!("without_dissolves: expanded {pairs} dissolves");
        Self::new(out)
    }

    /// Drop events on the reserved `AX`, `BL` and `GEN` reels
    #[must_use]
    pub fn without_generators(&self) -> Self {
        let out: Vec<Event> = self
            .events
            .iter()
            .filter(|event| !event.is_generator())
            .cloned()
            .collect();
        log::debug!(
            "without_generators: removed {} of {} events",
            self.events.len() - out.len(),
            self.events.len()
        );
        Self::new(out)
    }

    /// Merge runs of events that continue the same reel's source material
    ///
    /// An event is merged into the previously emitted event when both share
    /// a reel and its source in-point is one frame past the previous
    /// source out-point. The merged event takes the candidate's source and
    /// record out-points. Only the last emitted event is ever extended.
    #[must_use]
    pub fn spliced(&self) -> Self {
        let mut out: Vec<Event> = Vec::with_capacity(self.events.len());

        for event in &self.events {
            match out.last_mut() {
                Some(previous)
                    if previous.reel == event.reel
                        && event.source_start == previous.source_end + 1u32 =>
                {
                    previous.source_end = event.source_end;
                    previous.record_end = event.record_end;
                }
                _ => out.push(event.clone()),
            }
        }

        log::debug!(
            "spliced: {} events into {}",
            self.events.len(),
            out.len()
        );
        Self::new(out)
    }

    /// Number events sequentially from 1
    ///
    /// Numbers are zero-padded to three digits, or to the digit count of the
    /// event total when that is wider.
    #[must_use]
    pub fn renumbered(&self) -> Self {
        let width = self.events.len().to_string().len().max(3);
        let out = self
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| Event {
                num: format!("{:0width$}", index + 1),
                ..event.clone()
            })
            .collect();
        Self::new(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::ast::{ClipInfo, EventKind, TransitionInfo},
        utils::Timecode,
        Event, List,
    };

    fn tc(text: &str) -> Timecode {
        Timecode::parse(text, 25).unwrap()
    }

    fn cut(num: &str, reel: &str, times: [&str; 4]) -> Event {
        Event::new(
            num,
            reel,
            "V",
            times.map(tc),
            EventKind::VideoClip(ClipInfo::default()),
        )
    }

    fn dissolve(num: &str, reel: &str, duration: u32, times: [&str; 4]) -> Event {
        Event::new(
            num,
            reel,
            "V",
            times.map(tc),
            EventKind::Transition(TransitionInfo {
                duration,
                ..TransitionInfo::default()
            }),
        )
    }

    #[test]
    fn test_dissolve_pair_becomes_two_clips() {
        let list = List::new(vec![
            cut("001", "A", ["00:00:00:00", "00:00:05:00", "01:00:00:00", "01:00:05:00"]),
            dissolve("002", "B", 10, ["00:00:10:00", "00:00:15:00", "01:00:05:00", "01:00:10:00"]),
        ]);

        let expanded = list.without_dissolves();
        assert_eq!(expanded.len(), 2);

        let incoming = &expanded[0];
        assert_eq!(incoming.num, "001");
        assert_eq!(incoming.source_end, tc("00:00:05:10"));
        assert_eq!(incoming.record_end, tc("01:00:05:10"));
        assert!(matches!(incoming.kind, EventKind::Clip(_)));

        let outgoing = &expanded[1];
        assert_eq!(outgoing.num, "002A");
        assert_eq!(outgoing.record_start, tc("01:00:05:00"));
        assert!(!outgoing.is_transition());

        assert!(list[1].is_transition());
        assert_eq!(list[0].record_end, tc("01:00:05:00"));
    }

    #[test]
    fn test_leading_dissolve_is_dropped() {
        let list = List::new(vec![
            dissolve("001", "GEN", 25, ["00:00:55:10", "00:00:58:11", "01:00:29:19", "01:00:32:20"]),
            cut("002", "008C", ["08:04:24:24", "08:04:25:19", "01:00:32:20", "01:00:33:15"]),
        ]);
        let expanded = list.without_dissolves();
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].num, "002");
        assert!(matches!(expanded[0].kind, EventKind::VideoClip(_)));
    }

    #[test]
    fn test_second_dissolve_of_a_run_is_dropped() {
        let list = List::new(vec![
            cut("001", "A", ["00:00:00:00", "00:00:05:00", "01:00:00:00", "01:00:05:00"]),
            dissolve("002", "B", 10, ["00:00:10:00", "00:00:15:00", "01:00:05:00", "01:00:10:00"]),
            dissolve("003", "C", 10, ["00:00:20:00", "00:00:25:00", "01:00:10:00", "01:00:15:00"]),
        ]);
        let nums: Vec<_> = list
            .without_dissolves()
            .iter()
            .map(|e| e.num.clone())
            .collect();
        assert_eq!(nums, ["001", "002A"]);
    }

    #[test]
    fn test_generators_are_removed() {
        let list = List::new(vec![
            cut("001", "AX", ["00:00:00:00", "00:00:01:00", "01:00:00:00", "01:00:01:00"]),
            cut("002", "008C", ["00:00:00:00", "00:00:01:00", "01:00:01:00", "01:00:02:00"]),
            cut("003", "BL", ["00:00:00:00", "00:00:00:00", "01:00:02:00", "01:00:02:00"]),
            cut("004", "GEN", ["00:00:00:00", "00:00:01:00", "01:00:02:00", "01:00:03:00"]),
        ]);
        let footage = list.without_generators();
        assert_eq!(footage.len(), 1);
        assert_eq!(footage[0].reel, "008C");
        assert_eq!(footage.without_generators(), footage);
    }

    #[test]
    fn test_contiguous_source_is_spliced() {
        let list = List::new(vec![
            cut("001", "A", ["00:00:00:00", "00:00:01:00", "01:00:00:00", "01:00:01:00"]),
            cut("002", "A", ["00:00:01:01", "00:00:02:00", "01:00:01:00", "01:00:02:00"]),
            cut("003", "B", ["00:00:02:01", "00:00:03:00", "01:00:02:00", "01:00:03:00"]),
            cut("004", "B", ["00:00:05:00", "00:00:06:00", "01:00:03:00", "01:00:04:00"]),
        ]);
        let spliced = list.spliced();
        assert_eq!(spliced.len(), 3);
        assert_eq!(spliced[0].source_end, tc("00:00:02:00"));
        assert_eq!(spliced[0].record_end, tc("01:00:02:00"));
        assert_eq!(spliced[1].num, "003");
        assert_eq!(spliced[2].num, "004");
        assert_eq!(list[0].source_end, tc("00:00:01:00"));
    }

    #[test]
    fn test_renumbering_pads_to_three_digits() {
        let list: List = (0..7)
            .map(|_| cut("9", "A", ["00:00:00:00"; 4]))
            .collect();
        let nums: Vec<_> = list.renumbered().iter().map(|e| e.num.clone()).collect();
        assert_eq!(nums, ["001", "002", "003", "004", "005", "006", "007"]);
    }

    #[test]
    fn test_renumbering_widens_for_long_lists() {
        let list: List = (0..1500)
            .map(|_| cut("9", "A", ["00:00:00:00"; 4]))
            .collect();
        let renumbered = list.renumbered();
        assert_eq!(renumbered[0].num, "0001");
        assert_eq!(renumbered[1499].num, "1500");
        assert_eq!(list[0].num, "9");
    }
}
