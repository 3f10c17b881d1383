mod helpers;

use helpers::harness::TestSim;
use virtmem::{config::Config, replacement::Strategy, sim::Simulator, workload::Workload};

fn pages_for(workload: Workload) -> usize {
    match workload {
        // heap sort touches every byte many times
        Workload::Gamma => 3,
        _ => 6,
    }
}

#[test]
fn every_workload_survives_every_strategy() {
    for workload in Workload::ALL {
        for strategy in Strategy::ALL {
            let npages = pages_for(workload);
            let mut t = TestSim::new(npages, 2, strategy);

            t.sim
                .run(workload, 5)
                .unwrap_or_else(|e| panic!("{workload}/{strategy}: {e}"));
            t.sim.check_consistency().unwrap();

            let stats = t.stats();
            assert!(stats.disk_reads >= npages as u64, "{workload}/{strategy}");
            assert!(stats.page_faults >= stats.disk_reads, "{workload}/{strategy}");
        }
    }
}

#[test]
fn checksum_does_not_depend_on_strategy() {
    for workload in Workload::ALL {
        let npages = pages_for(workload);
        let roomy = TestSim::new(npages, npages, Strategy::Fifo)
            .sim
            .run(workload, 9)
            .unwrap();

        for strategy in Strategy::ALL {
            let mut tight = TestSim::new(npages, 2, strategy);
            assert_eq!(tight.sim.run(workload, 9).unwrap(), roomy, "{workload}/{strategy}");
        }
    }
}

#[test]
fn alpha_flushes_every_page_when_memory_is_short() {
    let mut t = TestSim::new(6, 2, Strategy::Fifo);
    t.sim.run(Workload::Alpha, 0).unwrap();

    let stats = t.stats();
    // the fill pass dirties each page and the first scan pushes it out
    assert!(stats.disk_writes >= 6);
    assert!(stats.evictions > 0);
}

#[test]
fn full_memory_needs_no_writeback() {
    for workload in Workload::ALL {
        let npages = pages_for(workload);
        let mut t = TestSim::new(npages, npages, Strategy::Random);
        t.sim.run(workload, 1).unwrap();

        let stats = t.stats();
        assert!(stats.disk_reads <= npages as u64, "{workload}");
        assert_eq!(stats.disk_writes, 0, "{workload}");
        assert_eq!(stats.evictions, 0, "{workload}");
    }
}

#[test]
fn file_backed_run_from_config() {
    let path = format!("/tmp/virtmem_{}.disk", rand::random::<u64>());
    let config = Config::new(5, 2, Strategy::ProtectClean, Workload::Beta)
        .with_seed(4)
        .with_disk_path(&path);

    let mut sim = Simulator::from_config(&config).unwrap();
    sim.run(config.workload, config.seed).unwrap();
    sim.check_consistency().unwrap();

    assert!(sim.stats().page_faults > 0);
    std::fs::remove_file(&path).ok();
}
