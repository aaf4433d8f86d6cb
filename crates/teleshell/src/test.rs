use std::{io, ops::ControlFlow, sync::Mutex, time::Duration};

use serde_json::{json, Value};

use crate::{
    failure::Category,
    pipeline::{First, JsonLines},
    *,
};

/// An in-memory paged listing service.
#[derive(Default)]
struct FakeService {
    pages: Vec<Vec<&'static str>>,
    /// Return the token "1" forever instead of advancing.
    repeat_token: bool,
    /// Return an empty token after the first page.
    empty_token: bool,
    /// Alternate between the tokens "1" and "2" forever.
    alternate_tokens: bool,
    failure: Option<fn() -> anyhow::Error>,
    delay: Option<Duration>,
    requests: Mutex<Vec<Option<String>>>,
}

impl FakeService {
    fn with_pages(pages: Vec<Vec<&'static str>>) -> Self {
        FakeService {
            pages,
            ..Default::default()
        }
    }

    fn requests(&self) -> Vec<Option<String>> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct ListWidgets {
    next_token: Option<String>,
    prefix: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct ListWidgetsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct ListWidgetsResponse {
    widgets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Cmdlet for ListWidgets {
    const NAME: &'static str = "fake:ListWidgets";
    const DEFAULT_SELECT: &'static str = "Widgets";

    type Provider = FakeService;
    type Request = ListWidgetsRequest;
    type Response = ListWidgetsResponse;

    fn request(&self) -> Self::Request {
        ListWidgetsRequest {
            next_token: self.next_token.clone(),
            prefix: self.prefix.clone(),
        }
    }

    async fn invoke(
        service: &FakeService,
        request: &ListWidgetsRequest,
    ) -> anyhow::Result<ListWidgetsResponse> {
        service
            .requests
            .lock()
            .unwrap()
            .push(request.next_token.clone());
        if let Some(delay) = service.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(failure) = service.failure {
            return Err(failure());
        }
        let index = match request.next_token.as_deref() {
            Some(token) => token.parse::<usize>()?,
            None => 0,
        };
        let widgets = service
            .pages
            .get(index)
            .map(|page| page.iter().map(|name| name.to_string()).collect())
            .unwrap_or_default();
        let next_token = if service.repeat_token {
            Some("1".to_owned())
        } else if service.alternate_tokens {
            Some(if index == 1 { "2" } else { "1" }.to_owned())
        } else if service.empty_token {
            Some(String::new())
        } else if index + 1 < service.pages.len() {
            Some((index + 1).to_string())
        } else {
            None
        };
        Ok(ListWidgetsResponse {
            widgets,
            next_token,
        })
    }

    fn continuation(response: &Self::Response) -> Option<String> {
        response.next_token.clone()
    }

    fn token(request: &Self::Request) -> Option<&str> {
        request.next_token.as_deref()
    }

    fn continue_with(request: &mut Self::Request, token: String) {
        request.next_token = Some(token);
    }

    fn auto_iterate(&self) -> bool {
        self.next_token.is_none()
    }
}

fn three_pages() -> FakeService {
    FakeService::with_pages(vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]])
}

fn dns_failure() -> anyhow::Error {
    anyhow::Error::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "failed to lookup address information: nodename nor servname provided, or not known",
    ))
    .context("dispatch failure")
}

#[tokio::test]
async fn pages_are_fetched_in_order() {
    let _ = env_logger::builder().is_test(true).try_init();

    let service = three_pages();
    let mut output: Vec<Value> = vec![];
    let summary = Invocation::new(&service)
        .run(ListWidgets::default(), &mut output)
        .await
        .unwrap();
    assert_eq!(
        vec![json!("a"), json!("b"), json!("c"), json!("d"), json!("e")],
        output
    );
    assert_eq!(
        Summary {
            pages: 3,
            objects: 5
        },
        summary
    );
    assert_eq!(
        vec![None, Some("1".to_owned()), Some("2".to_owned())],
        service.requests()
    );
}

#[tokio::test]
async fn bound_token_fetches_a_single_page() {
    let service = three_pages();
    let mut output: Vec<Value> = vec![];
    Invocation::new(&service)
        .run(
            ListWidgets {
                next_token: Some("1".into()),
                prefix: None,
            },
            &mut output,
        )
        .await
        .unwrap();
    assert_eq!(vec![json!("c"), json!("d")], output);
    assert_eq!(vec![Some("1".to_owned())], service.requests());
}

#[tokio::test]
async fn auto_iteration_can_be_turned_off() {
    let service = three_pages();
    let mut output: Vec<Value> = vec![];
    let summary = Invocation::new(&service)
        .with_auto_iteration(false)
        .run(ListWidgets::default(), &mut output)
        .await
        .unwrap();
    assert_eq!(1, summary.pages);
    assert_eq!(vec![json!("a"), json!("b")], output);
}

#[tokio::test]
async fn repeated_token_ends_iteration() {
    let _ = env_logger::builder().is_test(true).try_init();

    let service = FakeService {
        repeat_token: true,
        ..three_pages()
    };
    let summary = Invocation::new(&service)
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap();
    assert_eq!(2, summary.pages);
    assert_eq!(vec![None, Some("1".to_owned())], service.requests());
}

#[tokio::test]
async fn alternating_tokens_end_iteration() {
    let service = FakeService {
        alternate_tokens: true,
        ..three_pages()
    };
    let summary = Invocation::new(&service)
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap();
    assert_eq!(3, summary.pages);
    assert_eq!(
        vec![None, Some("1".to_owned()), Some("2".to_owned())],
        service.requests()
    );
}

#[tokio::test]
async fn empty_token_ends_iteration() {
    let service = FakeService {
        empty_token: true,
        ..three_pages()
    };
    let summary = Invocation::new(&service)
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap();
    assert_eq!(1, summary.pages);
}

#[tokio::test]
async fn sink_can_stop_pagination_early() {
    let service = three_pages();
    let mut first = First::new(3, Vec::<Value>::new());
    let summary = Invocation::new(&service)
        .run(ListWidgets::default(), &mut first)
        .await
        .unwrap();
    assert_eq!(vec![json!("a"), json!("b"), json!("c")], first.into_inner());
    assert_eq!(2, summary.pages);
    assert_eq!(2, service.requests().len());
}

/// Stops on the first value it sees.
struct StopImmediately(Vec<Value>);

impl Sink for StopImmediately {
    fn emit(&mut self, value: Value) -> io::Result<ControlFlow<()>> {
        self.0.push(value);
        Ok(ControlFlow::Break(()))
    }
}

#[tokio::test]
async fn custom_sinks_stop_the_run() {
    let service = three_pages();
    let mut sink = StopImmediately(vec![]);
    let summary = Invocation::new(&service)
        .run(ListWidgets::default(), &mut sink)
        .await
        .unwrap();
    assert_eq!(vec![json!("a")], sink.0);
    assert_eq!(1, summary.objects);
    assert_eq!(1, summary.pages);
}

#[tokio::test]
async fn first_zero_makes_no_requests() {
    let service = three_pages();
    let summary = Invocation::new(&service)
        .run(ListWidgets::default(), First::new(0, Vec::<Value>::new()))
        .await
        .unwrap();
    assert_eq!(Summary::default(), summary);
    assert!(service.requests().is_empty());
}

/// Fails every write with the given error kind.
struct FailingWriter(io::ErrorKind);

impl io::Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "no space left on device"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn write_failures_fail_the_run() {
    let service = three_pages();
    let failure = Invocation::new(&service)
        .run(
            ListWidgets::default(),
            JsonLines::new(FailingWriter(io::ErrorKind::Other)),
        )
        .await
        .unwrap_err();
    assert_eq!(Category::WriteError, failure.category);
    assert!(matches!(failure.error, Error::Output { .. }), "{failure}");
    assert!(
        failure.message.contains("no space left on device"),
        "{}",
        failure.message
    );
    assert_eq!(1, service.requests().len());
}

#[tokio::test]
async fn closed_output_stops_quietly() {
    let service = three_pages();
    let summary = Invocation::new(&service)
        .run(
            ListWidgets::default(),
            JsonLines::new(FailingWriter(io::ErrorKind::BrokenPipe)),
        )
        .await
        .unwrap();
    assert_eq!(
        Summary {
            pages: 1,
            objects: 0
        },
        summary
    );
}

#[tokio::test]
async fn select_whole_response_and_parameters() {
    let service = FakeService::with_pages(vec![vec!["a"]]);
    let mut output: Vec<Value> = vec![];
    Invocation::new(&service)
        .with_select(Some("*".into()))
        .run(ListWidgets::default(), &mut output)
        .await
        .unwrap();
    assert_eq!(vec![json!({ "Widgets": ["a"] })], output);

    let mut output: Vec<Value> = vec![];
    Invocation::new(&service)
        .with_select(Some("^Prefix".into()))
        .run(
            ListWidgets {
                next_token: None,
                prefix: Some("wid".into()),
            },
            &mut output,
        )
        .await
        .unwrap();
    assert_eq!(vec![json!("wid")], output);
}

#[tokio::test]
async fn invalid_selection_fails_before_any_request() {
    let service = three_pages();
    let failure = Invocation::new(&service)
        .with_pass_thru(true)
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap_err();
    assert_eq!(Category::InvalidArgument, failure.category);
    assert_eq!("fake:ListWidgets", failure.command);
    assert!(service.requests().is_empty());

    let failure = Invocation::new(&service)
        .with_select(Some("^Missing".into()))
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap_err();
    assert!(matches!(failure.error, Error::Select { .. }), "{failure}");
}

#[tokio::test]
async fn name_resolution_failures_name_the_endpoint() {
    let service = FakeService {
        failure: Some(dns_failure),
        ..three_pages()
    };
    let failure = Invocation::new(&service)
        .with_endpoint(Endpoint {
            region: Some("eu-west-3".into()),
            url: Some("http://localhost:4566".into()),
        })
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap_err();
    assert_eq!(Category::ConnectionError, failure.category);
    assert!(
        failure.message.contains("http://localhost:4566"),
        "{}",
        failure.message
    );
    assert!(failure.message.contains("eu-west-3"), "{}", failure.message);
    assert!(
        !failure.message.contains("nodename nor servname"),
        "{}",
        failure.message
    );
    assert!(matches!(failure.error, Error::NameResolution { .. }));
}

#[tokio::test]
async fn other_failures_are_reported_unchanged() {
    fn access_denied() -> anyhow::Error {
        anyhow::anyhow!("AccessDeniedException: not authorized to list widgets")
    }

    let service = FakeService {
        failure: Some(access_denied),
        ..three_pages()
    };
    let failure = Invocation::new(&service)
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap_err();
    assert_eq!(Category::InvalidOperation, failure.category);
    assert!(failure
        .message
        .contains("AccessDeniedException: not authorized to list widgets"));
    assert_eq!(1, service.requests().len());
}

#[tokio::test]
async fn cancellation_aborts_the_call_in_flight() {
    let service = FakeService {
        delay: Some(Duration::from_secs(60)),
        ..three_pages()
    };
    let cancellation = Cancellation::new();
    let trigger = cancellation.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let failure = tokio::time::timeout(
        Duration::from_secs(5),
        Invocation::new(&service)
            .with_cancellation(cancellation)
            .run(ListWidgets::default(), Vec::<Value>::new()),
    )
    .await
    .unwrap()
    .unwrap_err();
    assert_eq!(Category::OperationStopped, failure.category);
    assert!(matches!(failure.error, Error::Cancelled { .. }));
    assert_eq!(1, service.requests().len());
}

#[tokio::test]
async fn cancelled_runs_make_no_requests() {
    let service = three_pages();
    let cancellation = Cancellation::new();
    cancellation.cancel();
    let failure = Invocation::new(&service)
        .with_cancellation(cancellation)
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap_err();
    assert!(matches!(failure.error, Error::Cancelled { .. }));
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn failures_serialize_for_the_caller() {
    let service = FakeService {
        failure: Some(dns_failure),
        ..three_pages()
    };
    let failure = Invocation::new(&service)
        .run(ListWidgets::default(), Vec::<Value>::new())
        .await
        .unwrap_err();
    let record = serde_json::to_value(&failure).unwrap();
    assert_eq!(json!("fake:ListWidgets"), record["Command"]);
    assert_eq!(json!("ConnectionError"), record["Category"]);
    assert!(record["Message"]
        .as_str()
        .unwrap()
        .contains("region '<unset>'"));
}
