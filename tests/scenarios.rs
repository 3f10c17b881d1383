mod helpers;

use helpers::{
    disk::{reads, writes},
    harness::{TestSim, reads as read_touches},
};
use virtmem::{
    replacement::Strategy,
    workload::trace::{Touch, stamp},
};

#[test]
fn fifo_four_pages_two_frames() {
    let mut t = TestSim::new(4, 2, Strategy::Fifo);

    t.replay(&read_touches(&[0, 1])).unwrap();
    assert_eq!(t.sim.frame_of(0).unwrap(), Some(0));
    assert_eq!(t.sim.frame_of(1).unwrap(), Some(1));

    // page 0 goes first, then page 1
    t.replay(&[Touch::Read(2)]).unwrap();
    assert_eq!(t.sim.frame_of(0).unwrap(), None);
    assert_eq!(t.sim.frame_of(2).unwrap(), Some(0));

    t.replay(&[Touch::Read(3)]).unwrap();
    assert_eq!(t.sim.frame_of(1).unwrap(), None);
    assert_eq!(t.sim.frame_of(3).unwrap(), Some(1));

    t.replay(&[Touch::Read(0)]).unwrap();
    assert_eq!(t.sim.frame_of(0).unwrap(), Some(0));
    assert_eq!(t.sim.frame_of(2).unwrap(), None);

    let stats = t.stats();
    assert_eq!(stats.page_faults, 5);
    assert_eq!(stats.disk_reads, 5);
    assert_eq!(stats.disk_writes, 0);
    assert_eq!(stats.evictions, 3);
    assert_eq!(reads(&t.log), vec![0, 1, 2, 3, 0]);
    t.sim.check_consistency().unwrap();
}

#[test]
fn written_page_is_flushed_once_and_reloaded_intact() {
    let mut t = TestSim::new(4, 2, Strategy::Fifo);

    let checksum = t
        .replay(&[
            Touch::Write(0),
            Touch::Read(1),
            Touch::Read(2),
            Touch::Read(3),
            Touch::Read(0),
        ])
        .unwrap();

    let stats = t.stats();
    // the write to unmapped page 0 faults twice: load, then upgrade
    assert_eq!(stats.page_faults, 6);
    assert_eq!(stats.disk_reads, 5);
    assert_eq!(stats.disk_writes, 1);
    assert_eq!(writes(&t.log), vec![0]);
    assert_eq!(checksum, u64::from(stamp(0)));
}

#[test]
fn dirty_pages_are_flushed_in_eviction_order() {
    let mut t = TestSim::new(4, 2, Strategy::Fifo);

    t.replay(&[
        Touch::Write(0),
        Touch::Write(1),
        Touch::Write(2),
        Touch::Write(3),
        Touch::Read(0),
    ])
    .unwrap();

    let stats = t.stats();
    assert_eq!(stats.page_faults, 9);
    assert_eq!(stats.disk_reads, 5);
    assert_eq!(writes(&t.log), vec![0, 1, 2]);

    // every flush precedes the load that reuses the frame
    let log = t.log.borrow().clone();
    let flush_of_0 = log
        .iter()
        .position(|io| *io == helpers::disk::Io::Write(0))
        .unwrap();
    let load_of_2 = log
        .iter()
        .position(|io| *io == helpers::disk::Io::Read(2))
        .unwrap();
    assert!(flush_of_0 < load_of_2);
}

#[test]
fn clean_pages_are_never_flushed() {
    for strategy in Strategy::ALL {
        let mut t = TestSim::new(8, 3, strategy);
        let trace: Vec<usize> = (0..40).map(|i| (i * 5 + i / 4) % 8).collect();

        t.replay(&read_touches(&trace)).unwrap();

        assert_eq!(t.stats().disk_writes, 0, "{strategy}");
        assert!(t.stats().evictions > 0, "{strategy}");
    }
}

#[test]
fn enough_frames_never_evict() {
    for strategy in Strategy::ALL {
        let mut t = TestSim::new(5, 5, strategy);
        let mut trace: Vec<Touch> = (0..5).map(Touch::Write).collect();
        trace.extend((0..5).rev().map(Touch::Read));
        trace.extend((0..5).map(Touch::Write));

        t.replay(&trace).unwrap();

        let stats = t.stats();
        assert_eq!(stats.evictions, 0, "{strategy}");
        assert_eq!(stats.disk_writes, 0, "{strategy}");
        assert_eq!(stats.disk_reads, 5, "{strategy}");
        assert_eq!(stats.page_faults, 10, "{strategy}");
        t.sim.check_consistency().unwrap();
    }
}

#[test]
fn single_frame_thrashes_but_stays_correct() {
    for strategy in Strategy::ALL {
        let mut t = TestSim::new(3, 1, strategy);

        t.replay(&[
            Touch::Write(0),
            Touch::Write(1),
            Touch::Read(0),
            Touch::Write(2),
            Touch::Read(1),
        ])
        .unwrap();

        let stats = t.stats();
        assert_eq!(stats.disk_reads, 5, "{strategy}");
        assert_eq!(writes(&t.log), vec![0, 1, 2], "{strategy}");
        t.sim.check_consistency().unwrap();
    }
}

#[test]
fn out_of_range_access_is_an_error() {
    let mut t = TestSim::new(2, 1, Strategy::Random);
    assert!(t.replay(&[Touch::Read(2)]).is_err());
    assert!(t.replay(&[Touch::Write(usize::MAX)]).is_err());
    assert_eq!(t.stats().page_faults, 0);
}
