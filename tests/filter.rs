use shengdiao::contour::{ContourSeries, PitchSample};
use shengdiao::filter::{
    DEFAULT_SAFETY_FACTOR, clean, coalesce_gaps, drop_outliers, drop_slew_glitches,
};

fn series(samples: Vec<PitchSample>) -> ContourSeries {
    ContourSeries::from_samples(samples)
}

#[test]
fn outlier_blip_outside_the_octave_window_is_dropped() {
    let input = series(vec![
        PitchSample::voiced(0.0, 200.0),
        PitchSample::voiced(0.1, 205.0),
        PitchSample::voiced(0.2, 950.0),
        PitchSample::voiced(0.3, 210.0),
    ]);
    let out = drop_outliers(&input, DEFAULT_SAFETY_FACTOR);

    let freqs: Vec<f32> = out.voiced().map(|(_, f)| f).collect();
    assert_eq!(freqs, vec![200.0, 205.0, 210.0]);
}

#[test]
fn outlier_pass_keeps_gap_markers() {
    let input = series(vec![
        PitchSample::voiced(0.0, 200.0),
        PitchSample::unvoiced(0.1),
        PitchSample::voiced(0.2, 210.0),
    ]);
    let out = drop_outliers(&input, DEFAULT_SAFETY_FACTOR);
    assert_eq!(out.len(), 3);
    assert!(!out.samples()[1].is_voiced());
}

#[test]
fn outlier_pass_on_empty_and_all_unvoiced_input() {
    assert!(drop_outliers(&ContourSeries::new(), DEFAULT_SAFETY_FACTOR).is_empty());

    let gaps = series(vec![PitchSample::unvoiced(0.0)]);
    assert_eq!(drop_outliers(&gaps, DEFAULT_SAFETY_FACTOR).len(), 1);
}

#[test]
fn impossible_slew_spike_is_dropped() {
    // 200 -> 400 -> 200 Hz within 20 ms frames: a full octave up and back
    // down far faster than a voice can move.
    let input = series(vec![
        PitchSample::voiced(0.00, 200.0),
        PitchSample::voiced(0.02, 400.0),
        PitchSample::voiced(0.04, 200.0),
    ]);
    let out = drop_slew_glitches(&input, DEFAULT_SAFETY_FACTOR);

    let freqs: Vec<f32> = out.voiced().map(|(_, f)| f).collect();
    assert_eq!(freqs, vec![200.0, 200.0]);
}

#[test]
fn gradual_octave_rise_is_kept() {
    let input = series(vec![
        PitchSample::voiced(0.0, 200.0),
        PitchSample::voiced(0.5, 400.0),
        PitchSample::voiced(1.0, 200.0),
    ]);
    let out = drop_slew_glitches(&input, DEFAULT_SAFETY_FACTOR);
    assert_eq!(out.len(), 3);
}

#[test]
fn slew_pass_never_drops_endpoints_or_tiny_series() {
    let one = series(vec![PitchSample::voiced(0.0, 220.0)]);
    assert_eq!(drop_slew_glitches(&one, DEFAULT_SAFETY_FACTOR).len(), 1);

    let two = series(vec![
        PitchSample::voiced(0.00, 200.0),
        PitchSample::voiced(0.01, 400.0),
    ]);
    assert_eq!(drop_slew_glitches(&two, DEFAULT_SAFETY_FACTOR).len(), 2);
}

#[test]
fn gaps_next_to_a_sample_are_not_slews() {
    let input = series(vec![
        PitchSample::voiced(0.00, 200.0),
        PitchSample::unvoiced(0.02),
        PitchSample::voiced(0.04, 400.0),
    ]);
    assert_eq!(drop_slew_glitches(&input, DEFAULT_SAFETY_FACTOR).len(), 3);
}

#[test]
fn gap_runs_collapse_and_edges_are_trimmed() {
    let input = series(vec![
        PitchSample::unvoiced(0.0),
        PitchSample::voiced(0.1, 220.0),
        PitchSample::unvoiced(0.2),
        PitchSample::unvoiced(0.3),
        PitchSample::voiced(0.4, 230.0),
        PitchSample::unvoiced(0.5),
    ]);
    let out = coalesce_gaps(&input);

    let samples: Vec<_> = out
        .samples()
        .iter()
        .map(|p| (p.time, p.frequency))
        .collect();
    assert_eq!(
        samples,
        vec![(0.1, Some(220.0)), (0.2, None), (0.4, Some(230.0))]
    );
}

#[test]
fn clean_runs_all_three_passes() {
    let input = series(vec![
        PitchSample::unvoiced(0.00),
        PitchSample::voiced(0.10, 200.0),
        PitchSample::voiced(0.12, 950.0),
        PitchSample::voiced(0.20, 205.0),
        PitchSample::unvoiced(0.30),
        PitchSample::unvoiced(0.40),
        PitchSample::voiced(0.50, 210.0),
        PitchSample::unvoiced(0.60),
    ]);
    let out = clean(&input, DEFAULT_SAFETY_FACTOR);

    let samples: Vec<_> = out
        .samples()
        .iter()
        .map(|p| (p.time, p.frequency))
        .collect();
    assert_eq!(
        samples,
        vec![
            (0.10, Some(200.0)),
            (0.20, Some(205.0)),
            (0.30, None),
            (0.50, Some(210.0)),
        ]
    );
}
