#[cfg(test)]
mod tests {
    use maplit::btreemap;

    use crate::{
        common::ids::{FrameId, PageId},
        fault::errors::FaultError,
        frame::frame_table::FrameTable,
    };

    #[test]
    fn free_frames_are_claimed_left_to_right() {
        let mut table = FrameTable::new(3);

        assert_eq!(table.find_free_frame(), Some(FrameId(0)));
        assert_eq!(table.find_free_frame(), Some(FrameId(1)));
        assert_eq!(table.find_free_frame(), Some(FrameId(2)));
        assert_eq!(table.find_free_frame(), None);
        assert_eq!(table.occupied_count(), 3);
    }

    #[test]
    fn bind_then_lookup() {
        let mut table = FrameTable::new(2);
        let frame = table.find_free_frame().unwrap();

        table.bind(frame, PageId(7)).unwrap();

        assert_eq!(table.lookup(frame).unwrap(), PageId(7));
        assert_eq!(table.frame_of(PageId(7)), Some(frame));
        assert_eq!(table.frame_of(PageId(8)), None);
    }

    #[test]
    fn rebinding_hands_frame_to_new_page() {
        let mut table = FrameTable::new(1);
        let frame = table.find_free_frame().unwrap();
        table.bind(frame, PageId(1)).unwrap();

        table.bind(frame, PageId(2)).unwrap();

        assert_eq!(table.lookup(frame).unwrap(), PageId(2));
        assert_eq!(table.frame_of(PageId(1)), None);
    }

    #[test]
    fn lookup_of_unoccupied_frame_is_an_invariant_violation() {
        let table = FrameTable::new(2);
        assert!(matches!(
            table.lookup(FrameId(1)),
            Err(FaultError::InvariantViolation { .. })
        ));
        assert!(matches!(
            table.lookup(FrameId(5)),
            Err(FaultError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn bind_requires_claimed_frame() {
        let mut table = FrameTable::new(2);
        assert!(table.bind(FrameId(0), PageId(0)).is_err());
    }

    #[test]
    fn iter_reports_every_frame() {
        let mut table = FrameTable::new(3);
        for page in [4, 9] {
            let frame = table.find_free_frame().unwrap();
            table.bind(frame, PageId(page)).unwrap();
        }

        let resident: std::collections::BTreeMap<_, _> = table
            .iter()
            .map(|(frame, entry)| (frame.0, entry.resident_page.map(|p| p.0)))
            .collect();

        assert_eq!(
            resident,
            btreemap! { 0 => Some(4), 1 => Some(9), 2 => None }
        );
    }
}
