//! Call order between driver and codec

use mega_engine::{
    Callbacks, Codec, Matrix, NumRows, RoundTripError, RowSums, RunSettings, Transform,
};

use crate::common::{RecordingCodec, capture_with, settings_for};

#[test]
fn hops_follow_encode_send_decode_output() {
    let codec = RecordingCodec::default();
    let run = capture_with(RunSettings::default(), &codec);
    run.result.unwrap();

    assert_eq!(
        codec.hops(),
        vec![
            "solve",
            "encode(3)",
            "send(3, [[0, 2, 4], [6, 8, 10], [12, 14, 16]])",
            "decode(3, [6, 24, 42])",
            "output(3, [12, 48, 84])",
        ]
    );
}

#[test]
fn recording_codec_does_not_change_results() {
    let codec = RecordingCodec::default();
    let recorded = capture_with(settings_for(5), &codec);
    let plain = capture_with(settings_for(5), &Transform);
    assert_eq!(recorded.stdout, plain.stdout);
    assert_eq!(recorded.stderr, plain.stderr);
}

/// Driver stand-in that hands the transform a longer `num_rows` than the
/// row sums it builds.
struct Overreach;

impl Callbacks for Overreach {
    fn send(
        &mut self,
        codec: &dyn Codec,
        num_rows: NumRows,
        encoded: &mut Matrix,
    ) -> Result<(), RoundTripError> {
        let mut summed = RowSums::new(encoded.row_sums()?.into_inner()[..1].to_vec());
        codec.decode(num_rows, &mut summed, self)
    }

    fn output(&mut self, _num_rows: NumRows, _solution: &RowSums) -> Result<(), RoundTripError> {
        Ok(())
    }
}

#[test]
fn decode_fails_when_sequence_is_shorter_than_num_rows() {
    let mut matrix = Matrix::sample(NumRows::SAMPLE).unwrap();
    let err = Transform
        .encode(NumRows::SAMPLE, &mut matrix, &mut Overreach)
        .unwrap_err();
    assert!(matches!(
        err,
        RoundTripError::OutOfRange { index: 1, len: 1, .. }
    ));
}

#[test]
fn encode_fails_when_matrix_is_smaller_than_num_rows() {
    let mut matrix = Matrix::sample(NumRows::new(2)).unwrap();
    let err = Transform
        .encode(NumRows::SAMPLE, &mut matrix, &mut Overreach)
        .unwrap_err();
    // Row 0 has only two columns, so the first miss is (0, 2).
    assert_eq!(err.to_string(), "column index 2 out of range for length 2");
    assert_eq!(matrix.rows(), &[vec![0, 2], vec![2, 3]]);
}
