use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use freightline_core::errors::Result;
use std::any::Any;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

// A job takes the writer's dedicated connection and returns a core Result.
// Box<dyn Any + Send> erases the job's return type across the channel.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type Envelope = (
    Job<Box<dyn Any + Send + 'static>>,
    oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
);

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction; mutations submitted
    /// through this handle are applied strictly one at a time.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. The actor owns one connection from the pool and processes write
/// jobs serially, each inside an immediate transaction, so concurrent
/// assignment attempts are applied in some serial order.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            // StorageError::Domain carries typed core errors (e.g. a lost
            // rotation CAS) through the transaction boundary intact.
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // Ignore error if the receiver has dropped (e.g., the request
            // was cancelled).
            let _ = reply_tx.send(result);
        }
        // rx.recv() returned None: all WriteHandles were dropped, the actor
        // can terminate.
    });

    WriteHandle { tx }
}
