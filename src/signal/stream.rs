use std::pin::Pin;
use std::task::{Context, Poll};
use futures_core::Stream;
use futures_core::stream::FusedStream;
use futures_channel::mpsc::{unbounded, UnboundedReceiver};

use super::connection::{Connection, ScopedConnection};
use super::signal::Signal;


/// A `Stream` of the arguments emitted by a [`Signal`].
///
/// Created with [`Signal::stream`]. Every dispatch pushes a clone of its arguments,
/// even if nobody is polling yet, so values are never skipped.
///
/// The stream owns its connection: dropping the stream disconnects it. The stream
/// ends once the signal is dropped and every buffered value has been returned.
#[derive(Debug)]
#[must_use = "Streams do nothing unless polled"]
pub struct SignalStream<A> {
    receiver: UnboundedReceiver<A>,
    connection: ScopedConnection,
}

impl<A> SignalStream<A> {
    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

impl<A> Unpin for SignalStream<A> {}

impl<A> Stream for SignalStream<A> {
    type Item = A;

    #[inline]
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.receiver.size_hint()
    }
}

impl<A> FusedStream for SignalStream<A> {
    #[inline]
    fn is_terminated(&self) -> bool {
        self.receiver.is_terminated()
    }
}


impl<A, C> Signal<A, (), C> where A: Clone + 'static {
    /// Creates a [`SignalStream`] which receives a clone of the arguments of every dispatch.
    ///
    /// ```rust
    /// use slot_signals::signal::Signal;
    /// use futures_executor::block_on_stream;
    ///
    /// let signal: Signal<u32> = Signal::new();
    /// let stream = signal.stream();
    ///
    /// signal.emit(&1);
    /// signal.emit(&2);
    /// drop(signal);
    ///
    /// assert_eq!(block_on_stream(stream).collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn stream(&self) -> SignalStream<A> {
        let (sender, receiver) = unbounded();

        let connection = self.connect(move |args: &A| {
            // The receiver only goes away together with the connection
            let _ = sender.unbounded_send(args.clone());
        });

        SignalStream {
            receiver,
            connection: connection.scoped(),
        }
    }
}
