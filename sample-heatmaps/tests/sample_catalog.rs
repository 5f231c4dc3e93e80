//! End-to-end generation of the sample catalog into temporary directories

use approx::assert_abs_diff_eq;
use sample_heatmaps::image_proc::image::Colormap;
use sample_heatmaps::image_proc::rounding::round_to;
use sample_heatmaps::test_util::write_fixture_logo;
use sample_heatmaps::{
    default_catalog, generate_all, load_array, RunOptions, SampleError, SampleStorage,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_in_unit_range(path: &std::path::Path) {
    let arr = load_array(path).unwrap();
    assert!(
        arr.iter().all(|&v| (0.0..=1.0).contains(&v)),
        "{} has values outside [0, 1]",
        path.display()
    );
}

#[test]
fn test_full_catalog_round_trip() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sample-heatmaps");
    std::fs::create_dir_all(&out).unwrap();
    write_fixture_logo(&out, 12, 8);
    let storage = SampleStorage::with_output_dir(&out);

    let written = generate_all(&storage, &default_catalog(), RunOptions::default()).unwrap();
    assert_eq!(written.len(), 5);

    let expected_shapes = [
        ("noise_5x5.json", (5, 5)),
        ("noise_1000x1000.json", (1000, 1000)),
        ("increasing_values_10x10.json", (10, 10)),
        ("logo.json", (40, 60)),
        ("modified_logo.json", (40, 60)),
    ];
    for (name, shape) in expected_shapes {
        let path = out.join(name);
        assert_eq!(load_array(&path).unwrap().dim(), shape, "{name}");
        assert_in_unit_range(&path);
    }

    assert_eq!(
        storage.list_samples().unwrap(),
        vec![
            "increasing_values_10x10.json",
            "logo.json",
            "modified_logo.json",
            "noise_1000x1000.json",
            "noise_5x5.json",
        ]
    );
}

#[test]
fn test_formats_on_disk() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixture_logo(dir.path(), 4, 4);
    let storage = SampleStorage::with_output_dir(dir.path());

    let jobs: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename != "noise_1000x1000.json")
        .collect();
    generate_all(&storage, &jobs, RunOptions::default()).unwrap();

    let ramp = std::fs::read_to_string(dir.path().join("increasing_values_10x10.json")).unwrap();
    assert!(ramp.starts_with("[\n    [\n        0.0,\n        0.01,"));

    let logo = std::fs::read_to_string(dir.path().join("logo.json")).unwrap();
    assert!(!logo.contains('\n'));
    assert!(logo.starts_with("[["));

    let arr = load_array(&dir.path().join("increasing_values_10x10.json")).unwrap();
    assert_abs_diff_eq!(arr[[9, 9]], 0.99, epsilon = 1e-12);
    let values: Vec<f64> = arr.iter().copied().collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_seeded_runs_repeat() {
    init_logging();
    let jobs: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename != "noise_1000x1000.json")
        .collect();
    let options = RunOptions {
        seed: Some(2024),
        preview: None,
    };

    let mut runs = Vec::new();
    for _ in 0..2 {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_logo(dir.path(), 5, 5);
        let storage = SampleStorage::with_output_dir(dir.path());
        generate_all(&storage, &jobs, options).unwrap();
        runs.push((
            load_array(&dir.path().join("noise_5x5.json")).unwrap(),
            load_array(&dir.path().join("modified_logo.json")).unwrap(),
        ));
    }

    assert_eq!(runs[0], runs[1]);
}

#[test]
fn test_modified_logo_blend_on_disk() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixture_logo(dir.path(), 6, 6);
    let storage = SampleStorage::with_output_dir(dir.path());
    let jobs: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename == "logo.json" || job.filename == "modified_logo.json")
        .collect();

    generate_all(&storage, &jobs, RunOptions::default()).unwrap();
    let logo = load_array(&dir.path().join("logo.json")).unwrap();
    let blended = load_array(&dir.path().join("modified_logo.json")).unwrap();
    assert_eq!(logo.dim(), blended.dim());

    // noise and the Gaussian each contribute at most 0.25
    for (&l, &b) in logo.iter().zip(blended.iter()) {
        assert!(b >= round_to(0.5 * l, 2) - 0.01);
        assert!(b <= round_to(0.5 * l + 0.5, 2) + 0.01);
    }
}

#[test]
fn test_missing_logo_halts_run() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let storage = SampleStorage::with_output_dir(dir.path().join("out"));
    let jobs: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename != "noise_1000x1000.json")
        .collect();

    let err = generate_all(&storage, &jobs, RunOptions::default()).unwrap_err();
    assert!(matches!(err, SampleError::ImageLoad { .. }));

    let out = storage.output_dir();
    assert!(out.join("noise_5x5.json").exists());
    assert!(out.join("increasing_values_10x10.json").exists());
    assert!(!out.join("logo.json").exists());
    assert!(!out.join("modified_logo.json").exists());
}

#[test]
fn test_previews_leave_source_image_untouched() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let logo = write_fixture_logo(dir.path(), 3, 2);
    let original = std::fs::read(&logo).unwrap();
    let storage = SampleStorage::with_output_dir(dir.path());
    let jobs: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename == "logo.json" || job.filename == "modified_logo.json")
        .collect();

    let written = generate_all(
        &storage,
        &jobs,
        RunOptions {
            seed: Some(1),
            preview: Some(Colormap::Gray),
        },
    )
    .unwrap();

    assert_eq!(std::fs::read(&logo).unwrap(), original);
    assert_eq!(
        written[0].preview.as_deref(),
        Some(dir.path().join("logo.preview.png").as_path())
    );
    for sample in &written {
        let img = image::open(sample.preview.as_ref().unwrap()).unwrap();
        assert_eq!((img.width(), img.height()), (15, 10));
    }
}

#[test]
fn test_viridis_previews_are_rgb() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let storage = SampleStorage::with_output_dir(dir.path());
    let jobs: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename == "increasing_values_10x10.json")
        .collect();

    let written = generate_all(
        &storage,
        &jobs,
        RunOptions {
            seed: None,
            preview: Some(Colormap::Viridis),
        },
    )
    .unwrap();

    let img = image::open(written[0].preview.as_ref().unwrap()).unwrap();
    assert_eq!(img.color().channel_count(), 3);
    assert_eq!((img.width(), img.height()), (10, 10));
}

#[test]
fn test_subset_run_matches_full_run() {
    init_logging();
    let options = RunOptions {
        seed: Some(42),
        preview: None,
    };
    let small_jobs: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename != "noise_1000x1000.json")
        .collect();
    let only_modified: Vec<_> = default_catalog()
        .into_iter()
        .filter(|job| job.filename == "modified_logo.json")
        .collect();

    let mut outputs = Vec::new();
    for jobs in [&small_jobs, &only_modified] {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_logo(dir.path(), 4, 3);
        let storage = SampleStorage::with_output_dir(dir.path());
        generate_all(&storage, jobs, options).unwrap();
        outputs.push(load_array(&dir.path().join("modified_logo.json")).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}
