use netplay::{lines::MAX_LINE_LEN, transform::transform, Error};

async fn run(input: &[u8]) -> (u64, Vec<u8>) {
    let mut output = Vec::new();
    let lines = transform(input, &mut output).await.unwrap();
    (lines, output)
}

#[tokio::test]
async fn uppercases_each_line() {
    let (lines, output) = run(b"a\nBc\n").await;
    assert_eq!(lines, 2);
    assert_eq!(output, b"A\nBC\n");
}

#[tokio::test]
async fn terminates_unterminated_last_line() {
    let (_, output) = run(b"xyz").await;
    assert_eq!(output, b"XYZ\n");
}

#[tokio::test]
async fn empty_input_writes_nothing() {
    let (lines, output) = run(b"").await;
    assert_eq!(lines, 0);
    assert!(output.is_empty());
}

#[tokio::test]
async fn keeps_blank_lines_and_drops_carriage_returns() {
    let (_, output) = run(b"one\r\n\ntwo\r\n").await;
    assert_eq!(output, b"ONE\n\nTWO\n");
}

#[tokio::test]
async fn over_long_line_is_a_read_error() {
    let mut input = b"ok\n".to_vec();
    input.extend(std::iter::repeat(b'z').take(MAX_LINE_LEN + 1));

    let mut output = Vec::new();
    let err = transform(&input[..], &mut output).await.unwrap_err();

    assert!(matches!(err, Error::Read(_)));
    assert_eq!(output, b"OK\n");
}

#[tokio::test]
async fn write_failure_is_reported() {
    let (reader, writer) = tokio::io::duplex(64);
    drop(reader);

    let err = transform(&b"lost\n"[..], writer).await.unwrap_err();
    assert!(matches!(err, Error::Write(_)));
}
