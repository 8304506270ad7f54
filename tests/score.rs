use approx::assert_relative_eq;
use shengdiao::contour::{ContourSeries, PitchSample};
use shengdiao::score::pitch_distance;

fn voiced_series(freqs: &[f32]) -> ContourSeries {
    ContourSeries::from_samples(
        freqs
            .iter()
            .enumerate()
            .map(|(i, &f)| PitchSample::voiced(i as f32 * 0.1, f))
            .collect(),
    )
}

#[test]
fn identical_contours_score_zero() {
    let rising = voiced_series(&[200.0, 220.0, 240.0, 260.0]);
    assert_relative_eq!(pitch_distance(&rising, &rising).unwrap(), 0.0);
}

#[test]
fn empty_or_unvoiced_contours_have_no_distance() {
    let rising = voiced_series(&[200.0, 220.0]);
    assert_eq!(pitch_distance(&rising, &ContourSeries::new()), None);

    let gaps = ContourSeries::from_samples(vec![PitchSample::unvoiced(0.0)]);
    assert_eq!(pitch_distance(&rising, &gaps), None);
    assert_eq!(pitch_distance(&gaps, &gaps), None);
}

#[test]
fn matching_shape_beats_opposite_shape() {
    let rising = voiced_series(&[200.0, 220.0, 240.0, 260.0]);
    let also_rising = voiced_series(&[210.0, 230.0, 250.0, 270.0]);
    let falling = voiced_series(&[260.0, 240.0, 220.0, 200.0]);

    let same = pitch_distance(&rising, &also_rising).unwrap();
    let opposite = pitch_distance(&rising, &falling).unwrap();
    assert!(same < opposite);
}

#[test]
fn tempo_differences_are_absorbed() {
    // The same rise sampled at twice the rate should align almost freely.
    let slow = voiced_series(&[200.0, 220.0, 240.0]);
    let fast = voiced_series(&[200.0, 210.0, 220.0, 230.0, 240.0]);
    let warped = pitch_distance(&slow, &fast).unwrap();

    let falling = voiced_series(&[240.0, 220.0, 200.0]);
    let opposite = pitch_distance(&slow, &falling).unwrap();
    assert!(warped < opposite);
}

#[test]
fn unvoiced_samples_carry_no_tonal_information() {
    let plain = voiced_series(&[200.0, 240.0]);
    let with_gap = ContourSeries::from_samples(vec![
        PitchSample::voiced(0.0, 200.0),
        PitchSample::unvoiced(0.1),
        PitchSample::voiced(0.2, 240.0),
    ]);
    assert_relative_eq!(
        pitch_distance(&plain, &with_gap).unwrap(),
        pitch_distance(&plain, &plain).unwrap()
    );
}
