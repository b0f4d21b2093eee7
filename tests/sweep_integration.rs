use lcs_dp_bench::{InstanceKind, Sweep, SweepBuilder, SweepConfig, CSV_HEADER};

fn parse_rows(csv: &str) -> Vec<(usize, usize, usize, f64, f64)> {
    csv.lines()
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 5, "malformed row {line:?}");
            (
                fields[0].parse().unwrap(),
                fields[1].parse().unwrap(),
                fields[2].parse().unwrap(),
                fields[3].parse().unwrap(),
                fields[4].parse().unwrap(),
            )
        })
        .collect()
}

#[test]
fn two_by_one_worst_case_grid() {
    let config = SweepConfig {
        max_n: 200,
        max_m: 100,
        kind: InstanceKind::from_flag(0),
        ..SweepConfig::default()
    };
    let sweep = Sweep::new(config).unwrap();
    let mut out = Vec::new();
    sweep.run(&mut out).unwrap();

    let csv = String::from_utf8(out).unwrap();
    assert_eq!(csv.lines().next(), Some(CSV_HEADER));
    let rows = parse_rows(&csv);
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].0, rows[0].1, rows[0].2), (0, 100, 100));
    assert_eq!((rows[1].0, rows[1].1, rows[1].2), (1, 200, 100));
    for &(_, _, _, td, bu) in &rows {
        assert!(td >= 0.0 && td.is_finite());
        assert!(bu >= 0.0 && bu.is_finite());
    }
}

#[test]
fn instance_indices_are_consecutive() {
    let sweep = SweepBuilder::new()
        .max_n(300)
        .max_m(250)
        .kind(InstanceKind::BestCase)
        .repetitions(2)
        .build()
        .unwrap();
    let mut out = Vec::new();
    let rows = sweep.run(&mut out).unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(sweep.num_cells(), 6);

    let parsed = parse_rows(&String::from_utf8(out).unwrap());
    let cells: Vec<_> = parsed.iter().map(|r| (r.0, r.1, r.2)).collect();
    assert_eq!(
        cells,
        vec![
            (0, 100, 100),
            (1, 100, 200),
            (2, 200, 100),
            (3, 200, 200),
            (4, 300, 100),
            (5, 300, 200),
        ]
    );
    for row in &rows {
        assert_eq!(row.top_down.lcs_len, row.bottom_up.lcs_len);
    }
}

#[test]
fn bounds_below_step_produce_header_only() {
    let sweep = SweepBuilder::new().max_n(99).max_m(1000).build().unwrap();
    let mut out = Vec::new();
    assert!(sweep.run(&mut out).unwrap().is_empty());
    assert_eq!(String::from_utf8(out).unwrap(), format!("{CSV_HEADER}\n"));
}

#[test]
fn broken_sink_surfaces_io_error() {
    struct Failing;
    impl std::io::Write for Failing {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let sweep = SweepBuilder::new().max_n(100).max_m(100).repetitions(1).build().unwrap();
    let err = sweep.run(&mut Failing).unwrap_err();
    assert!(matches!(err, lcs_dp_bench::BenchError::Io(_)));
}
