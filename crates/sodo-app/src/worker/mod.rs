//! Background execution of solving-service requests.
//!
//! Service calls block, so they never run on the UI thread. A [`Worker`]
//! forwards each request to a backend and hands back a future that flows can
//! await; the future is polled by the flow executor once per frame and
//! resolves when the backend's reply arrives on the response channel.
//!
//! The `thread` backend owns the service on one dedicated thread. Tests use an
//! inline backend that answers synchronously on enqueue.

use std::{
    future::Future,
    pin::Pin,
    sync::mpsc,
    task::{Context, Poll},
};

use sodo_client::{Level, ServiceError, SolverService};
use sodo_core::{Board, Digit, Position, Trace, Verdict};

mod thread;

/// A request that can be offloaded to the worker.
///
/// Internal: prefer the typed helpers on [`Worker`].
#[derive(Debug, Clone)]
enum WorkRequest {
    NewGame(Level),
    Validate { pos: Position, digit: Digit },
    Hint(Position),
    Visualize,
    Solution,
    Check(Vec<(Position, Digit)>),
}

/// A response produced by background work.
#[derive(Debug)]
enum WorkResponse {
    PuzzleReady(Board),
    VerdictReady(Verdict),
    HintReady(Digit),
    TraceReady(Trace),
    SolutionReady(Board),
    CheckReady(Vec<Position>),
    Error(WorkError),
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkError {
    /// The service call itself failed.
    #[display("{source}")]
    Service { source: ServiceError },
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
    /// Received a response that does not match the request.
    #[display("unexpected worker response")]
    UnexpectedResponse,
}

impl From<ServiceError> for WorkError {
    fn from(source: ServiceError) -> Self {
        Self::Service { source }
    }
}

impl WorkError {
    /// The server's own message, when it refused the request.
    #[must_use]
    pub(crate) fn rejection(&self) -> Option<&str> {
        match self {
            Self::Service {
                source: ServiceError::Rejected { message },
            } => Some(message),
            _ => None,
        }
    }
}

impl WorkRequest {
    /// Runs the request against `service`.
    fn handle(self, service: &dyn SolverService) -> WorkResponse {
        let result = match self {
            WorkRequest::NewGame(level) => service.new_game(level).map(WorkResponse::PuzzleReady),
            WorkRequest::Validate { pos, digit } => service
                .validate(pos, digit)
                .map(WorkResponse::VerdictReady),
            WorkRequest::Hint(pos) => service.hint(pos).map(WorkResponse::HintReady),
            WorkRequest::Visualize => service.visualize().map(WorkResponse::TraceReady),
            WorkRequest::Solution => service.solution().map(WorkResponse::SolutionReady),
            WorkRequest::Check(entries) => service.check(&entries).map(WorkResponse::CheckReady),
        };
        result.unwrap_or_else(|err| WorkResponse::Error(err.into()))
    }
}

struct Envelope {
    request: WorkRequest,
    response_tx: mpsc::Sender<WorkResponse>,
}

#[derive(Clone)]
enum Backend {
    Thread(mpsc::Sender<Envelope>),
    #[cfg(test)]
    Inline(std::rc::Rc<dyn SolverService>),
}

/// Cloneable handle to the request worker.
#[derive(Clone)]
pub(crate) struct Worker {
    backend: Backend,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backend = match self.backend {
            Backend::Thread(_) => "thread",
            #[cfg(test)]
            Backend::Inline(_) => "inline",
        };
        f.debug_struct("Worker").field("backend", &backend).finish()
    }
}

impl Worker {
    /// Moves `service` onto a new worker thread.
    #[must_use]
    pub(crate) fn spawn(service: Box<dyn SolverService>) -> Self {
        Self {
            backend: Backend::Thread(thread::spawn(service)),
        }
    }

    /// Answers every request synchronously on the calling thread.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn inline(service: impl SolverService + 'static) -> Self {
        Self {
            backend: Backend::Inline(std::rc::Rc::new(service)),
        }
    }

    fn enqueue(&self, request: WorkRequest) -> Result<WorkHandle, WorkError> {
        let (response_tx, receiver) = mpsc::channel();
        match &self.backend {
            Backend::Thread(sender) => sender
                .send(Envelope {
                    request,
                    response_tx,
                })
                .map_err(|_| WorkError::WorkerDisconnected)?,
            #[cfg(test)]
            Backend::Inline(service) => {
                let _ = response_tx.send(request.handle(service.as_ref()));
            }
        }
        Ok(WorkHandle { receiver })
    }

    /// Enqueue background work and return a future for the response.
    #[must_use]
    fn request(&self, request: WorkRequest) -> WorkResponseFuture {
        WorkResponseFuture::new(self.enqueue(request))
    }

    /// Starts a session at `level` and returns its givens.
    pub(crate) async fn new_game(&self, level: Level) -> Result<Board, WorkError> {
        match self.request(WorkRequest::NewGame(level)).await {
            WorkResponse::PuzzleReady(board) => Ok(board),
            WorkResponse::Error(err) => Err(err),
            _ => Err(WorkError::UnexpectedResponse),
        }
    }

    pub(crate) async fn validate(&self, pos: Position, digit: Digit) -> Result<Verdict, WorkError> {
        match self.request(WorkRequest::Validate { pos, digit }).await {
            WorkResponse::VerdictReady(verdict) => Ok(verdict),
            WorkResponse::Error(err) => Err(err),
            _ => Err(WorkError::UnexpectedResponse),
        }
    }

    pub(crate) async fn hint(&self, pos: Position) -> Result<Digit, WorkError> {
        match self.request(WorkRequest::Hint(pos)).await {
            WorkResponse::HintReady(digit) => Ok(digit),
            WorkResponse::Error(err) => Err(err),
            _ => Err(WorkError::UnexpectedResponse),
        }
    }

    pub(crate) async fn visualize(&self) -> Result<Trace, WorkError> {
        match self.request(WorkRequest::Visualize).await {
            WorkResponse::TraceReady(trace) => Ok(trace),
            WorkResponse::Error(err) => Err(err),
            _ => Err(WorkError::UnexpectedResponse),
        }
    }

    pub(crate) async fn solution(&self) -> Result<Board, WorkError> {
        match self.request(WorkRequest::Solution).await {
            WorkResponse::SolutionReady(board) => Ok(board),
            WorkResponse::Error(err) => Err(err),
            _ => Err(WorkError::UnexpectedResponse),
        }
    }

    /// Checks complete-board entries and returns the wrong positions.
    pub(crate) async fn check(
        &self,
        entries: Vec<(Position, Digit)>,
    ) -> Result<Vec<Position>, WorkError> {
        match self.request(WorkRequest::Check(entries)).await {
            WorkResponse::CheckReady(wrong) => Ok(wrong),
            WorkResponse::Error(err) => Err(err),
            _ => Err(WorkError::UnexpectedResponse),
        }
    }
}

/// A handle for polling background work completion.
struct WorkHandle {
    receiver: mpsc::Receiver<WorkResponse>,
}

impl WorkHandle {
    fn poll(&mut self) -> Result<Option<WorkResponse>, WorkError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }
}

/// Future that resolves to a background work response.
struct WorkResponseFuture {
    handle: Option<WorkHandle>,
    response: Option<WorkResponse>,
}

impl WorkResponseFuture {
    #[must_use]
    fn new(result: Result<WorkHandle, WorkError>) -> Self {
        match result {
            Ok(handle) => Self {
                handle: Some(handle),
                response: None,
            },
            Err(err) => Self {
                handle: None,
                response: Some(WorkResponse::Error(err)),
            },
        }
    }
}

impl Future for WorkResponseFuture {
    type Output = WorkResponse;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(response) = self.response.take() {
            return Poll::Ready(response);
        }

        let Some(handle) = self.handle.as_mut() else {
            return Poll::Ready(WorkResponse::Error(WorkError::WorkerDisconnected));
        };

        match handle.poll() {
            Ok(Some(response)) => Poll::Ready(response),
            Ok(None) => Poll::Pending,
            Err(err) => Poll::Ready(WorkResponse::Error(err)),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted [`SolverService`] for flow and handler tests.

    use std::{
        collections::HashMap,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use sodo_client::{Level, ServiceError, SolverService};
    use sodo_core::{Board, Digit, Position, Trace, Verdict};

    /// Answers every call with a fixed result and counts calls.
    #[derive(Debug, Clone)]
    pub(crate) struct FakeService {
        pub(crate) board: Result<Board, ServiceError>,
        pub(crate) verdict: Result<Verdict, ServiceError>,
        /// Per-cell verdicts that take precedence over `verdict`.
        pub(crate) verdicts: HashMap<Position, Verdict>,
        pub(crate) solution: Result<Board, ServiceError>,
        pub(crate) hint: Result<Digit, ServiceError>,
        pub(crate) trace: Result<Trace, ServiceError>,
        pub(crate) calls: Arc<AtomicUsize>,
    }

    impl FakeService {
        pub(crate) fn new(trace: Trace) -> Self {
            Self {
                board: Ok(Board::new()),
                verdict: Ok(Verdict::Correct),
                verdicts: HashMap::new(),
                solution: Ok(filled(Digit::D1)),
                hint: Ok(Digit::D1),
                trace: Ok(trace),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn record<T: Clone>(&self, result: &Result<T, ServiceError>) -> Result<T, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            result.clone()
        }
    }

    impl SolverService for FakeService {
        fn new_game(&self, _level: Level) -> Result<Board, ServiceError> {
            self.record(&self.board)
        }

        fn validate(&self, pos: Position, _digit: Digit) -> Result<Verdict, ServiceError> {
            match self.verdicts.get(&pos) {
                Some(verdict) => self.record(&Ok(*verdict)),
                None => self.record(&self.verdict),
            }
        }

        fn hint(&self, _pos: Position) -> Result<Digit, ServiceError> {
            self.record(&self.hint)
        }

        fn visualize(&self) -> Result<Trace, ServiceError> {
            self.record(&self.trace)
        }

        fn solution(&self) -> Result<Board, ServiceError> {
            self.record(&self.solution)
        }
    }

    /// A board with `digit` in every cell.
    pub(crate) fn filled(digit: Digit) -> Board {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Some(digit));
        }
        board
    }
}
