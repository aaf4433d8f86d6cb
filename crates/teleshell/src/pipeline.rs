//! Pipeline output.
//!
//! Commands push every projected object into a [`Sink`]. A sink may ask the
//! command to stop early, which ends pagination without fetching more pages.
//! A sink that fails to take an object reports the error, and the command
//! fails with it.
use std::{
    io::{self, Write},
    ops::ControlFlow,
};

use serde_json::Value;

/// Receives pipeline objects.
pub trait Sink {
    /// Take one object. `Break` means the object was taken and no more are
    /// wanted.
    fn emit(&mut self, value: Value) -> io::Result<ControlFlow<()>>;

    /// Whether the sink will take another object.
    fn wants_more(&self) -> bool {
        true
    }
}

impl Sink for Vec<Value> {
    fn emit(&mut self, value: Value) -> io::Result<ControlFlow<()>> {
        self.push(value);
        Ok(ControlFlow::Continue(()))
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, value: Value) -> io::Result<ControlFlow<()>> {
        (**self).emit(value)
    }

    fn wants_more(&self) -> bool {
        (**self).wants_more()
    }
}

/// Writes one JSON document per line.
pub struct JsonLines<W> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonLines<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for JsonLines<W> {
    fn emit(&mut self, value: Value) -> io::Result<ControlFlow<()>> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &value)?;
        } else {
            serde_json::to_writer(&mut self.writer, &value)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(ControlFlow::Continue(()))
    }
}

/// Passes through at most `limit` objects, then asks the command to stop.
pub struct First<S> {
    inner: S,
    remaining: usize,
}

impl<S: Sink> First<S> {
    pub fn new(limit: usize, inner: S) -> Self {
        Self {
            inner,
            remaining: limit,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for First<S> {
    fn emit(&mut self, value: Value) -> io::Result<ControlFlow<()>> {
        if self.remaining == 0 {
            return Ok(ControlFlow::Break(()));
        }
        let flow = self.inner.emit(value)?;
        self.remaining -= 1;
        if flow.is_break() || self.remaining == 0 {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }

    fn wants_more(&self) -> bool {
        self.remaining > 0 && self.inner.wants_more()
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    /// Fails every write with the given error kind.
    struct Failing(io::ErrorKind);

    impl Write for Failing {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_lines() {
        let mut sink = JsonLines::new(vec![]);
        assert!(sink.emit(json!({ "Alias": "oncall" })).unwrap().is_continue());
        assert!(sink.emit(json!("movies")).unwrap().is_continue());
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!("{\"Alias\":\"oncall\"}\n\"movies\"\n", out);
    }

    #[test]
    fn json_lines_reports_write_failures() {
        let mut sink = JsonLines::new(Failing(io::ErrorKind::PermissionDenied));
        let e = sink.emit(json!("movies")).unwrap_err();
        assert_eq!(io::ErrorKind::PermissionDenied, e.kind());
    }

    #[test]
    fn first_stops_after_limit() {
        let mut sink = First::new(2, vec![]);
        assert!(sink.wants_more());
        assert!(sink.emit(json!(1)).unwrap().is_continue());
        assert!(sink.emit(json!(2)).unwrap().is_break());
        assert!(!sink.wants_more());
        assert!(sink.emit(json!(3)).unwrap().is_break());
        assert_eq!(vec![json!(1), json!(2)], sink.into_inner());
    }

    #[test]
    fn first_zero_emits_nothing() {
        let mut sink = First::new(0, vec![]);
        assert!(!sink.wants_more());
        assert!(sink.emit(json!(1)).unwrap().is_break());
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn first_passes_write_failures_on() {
        let mut sink = First::new(2, JsonLines::new(Failing(io::ErrorKind::Other)));
        assert!(sink.emit(json!(1)).is_err());
        assert!(sink.wants_more());
    }
}
