//! IPC protocol for running a handler as a worker process.
//!
//! Workers talk to their host using a simple length-prefixed JSON protocol
//! over stdin/stdout: a 4-byte big-endian length followed by that many bytes
//! of JSON. Requests come in on stdin, responses go out on stdout, so workers
//! must log to stderr.
//!
//! # Example
//! ```ignore
//! use amigo_secreto_sdk::prelude::*;
//!
//! fn main() {
//!     amigo_secreto_sdk::ipc::serve(|req| Response::ok(json!({"path": req.path})));
//! }
//! ```

use crate::{HandlerError, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, ErrorKind, Read, Write};

/// Read one frame from `reader`.
///
/// Returns `Ok(None)` when the stream ends cleanly before a new frame starts.
pub fn read_frame<T: DeserializeOwned, R: Read>(reader: &mut R) -> Result<Option<T>, HandlerError> {
    // Read length prefix (4 bytes, big-endian)
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(HandlerError::IpcError(format!("Failed to read length prefix: {}", e))),
    }

    let len = u32::from_be_bytes(len_buf) as usize;

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)
        .map_err(|e| HandlerError::IpcError(format!("Failed to read payload: {}", e)))?;

    serde_json::from_slice(&payload)
        .map(Some)
        .map_err(|e| HandlerError::IpcError(format!("Failed to parse frame: {}", e)))
}

/// Write one frame to `writer` and flush it.
pub fn write_frame<T: Serialize, W: Write>(writer: &mut W, value: &T) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(value)
        .map_err(|e| HandlerError::IpcError(format!("Failed to serialize frame: {}", e)))?;

    let len = u32::try_from(payload.len())
        .map_err(|_| HandlerError::IpcError(format!("Frame too large: {} bytes", payload.len())))?;

    writer.write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::IpcError(format!("Failed to write length: {}", e)))?;
    writer.write_all(&payload)
        .map_err(|e| HandlerError::IpcError(format!("Failed to write payload: {}", e)))?;
    writer.flush()
        .map_err(|e| HandlerError::IpcError(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Answer every request on `reader` with `handler`, writing responses to `writer`.
///
/// Returns when the input stream ends. A frame that cannot be read stops the
/// loop with an error; a response that cannot be written is logged and skipped.
pub fn serve_io<R, W, F>(reader: &mut R, writer: &mut W, mut handler: F) -> Result<(), HandlerError>
where
    R: Read,
    W: Write,
    F: FnMut(Request) -> Response,
{
    while let Some(req) = read_frame::<Request, _>(reader)? {
        let request_id = req.request_id.clone();
        let response = handler(req);
        if let Err(e) = write_frame(writer, &response) {
            tracing::error!(request_id = %request_id, "Failed to send response: {}", e);
        }
    }
    tracing::debug!("Request stream closed");
    Ok(())
}

/// Run `handler` over stdin/stdout until the host closes the stream.
pub fn serve<F>(handler: F) -> Result<(), HandlerError>
where
    F: FnMut(Request) -> Response,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve_io(&mut stdin.lock(), &mut stdout.lock(), handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn framed(requests: &[Request]) -> Vec<u8> {
        let mut buf = Vec::new();
        for req in requests {
            write_frame(&mut buf, req).unwrap();
        }
        buf
    }

    #[test]
    fn test_frame_layout() {
        let mut buf = Vec::new();
        write_frame(&mut buf, &json!({"a": 1})).unwrap();
        assert_eq!(&buf[..4], &7u32.to_be_bytes());
        assert_eq!(&buf[4..], br#"{"a":1}"#);
    }

    #[test]
    fn test_empty_stream_ends_cleanly() {
        let mut reader = Cursor::new(Vec::<u8>::new());
        let frame: Option<Request> = read_frame(&mut reader).unwrap();
        assert!(frame.is_none());
    }

    #[test]
    fn test_truncated_payload_is_error() {
        let mut bytes = 10u32.to_be_bytes().to_vec();
        bytes.extend_from_slice(b"{}");
        let mut reader = Cursor::new(bytes);
        let err = read_frame::<Request, _>(&mut reader).unwrap_err();
        assert!(matches!(err, HandlerError::IpcError(_)));
    }

    #[test]
    fn test_serve_io_answers_each_request() {
        let input = framed(&[
            Request::new("POST", "/api/buscar").with_body("1"),
            Request::new("GET", "/api/buscar"),
        ]);
        let mut reader = Cursor::new(input);
        let mut output = Vec::new();

        serve_io(&mut reader, &mut output, |req| {
            Response::ok(json!({"method": req.method}))
        })
        .unwrap();

        let mut out = Cursor::new(output);
        let first: Response = read_frame(&mut out).unwrap().unwrap();
        let second: Response = read_frame(&mut out).unwrap().unwrap();
        assert!(read_frame::<Response, _>(&mut out).unwrap().is_none());

        assert_eq!(first.json_body().unwrap(), json!({"method": "POST"}));
        assert_eq!(second.json_body().unwrap(), json!({"method": "GET"}));
    }
}
