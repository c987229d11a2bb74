//! In-memory tables backed by dashmap.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use boxoffice_core::error::AppError;
use boxoffice_core::result::AppResult;
use boxoffice_core::types::{BookingId, MovieId, UserId};
use boxoffice_entity::{Booking, Movie, NewBooking, NewMovie, NewUser, User};

use crate::store::{BookingStore, MovieStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: DashMap<UserId, User>,
    /// Unique index on `users.username`.
    usernames: DashMap<String, UserId>,
    movies: DashMap<MovieId, Movie>,
    bookings: DashMap<BookingId, Booking>,
    /// Unique index on `bookings(user_id, movie_id)`.
    booking_pairs: DashMap<(UserId, MovieId), BookingId>,
    user_seq: AtomicI64,
    movie_seq: AtomicI64,
    booking_seq: AtomicI64,
}

/// Process-local store; cloning shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(seq: &AtomicI64) -> i64 {
    seq.fetch_add(1, Ordering::SeqCst) + 1
}

/// Clone every value out of a map, sorted by key.
fn sorted_values<K, V>(map: &DashMap<K, V>) -> Vec<V>
where
    K: Ord + Copy + std::hash::Hash + Eq,
    V: Clone,
{
    let mut rows: Vec<(K, V)> = map
        .iter()
        .map(|entry| (*entry.key(), entry.value().clone()))
        .collect();
    rows.sort_by_key(|(key, _)| *key);
    rows.into_iter().map(|(_, value)| value).collect()
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let id = self.tables.usernames.get(username).map(|entry| *entry.value());
        Ok(id.and_then(|id| self.tables.users.get(&id).map(|u| u.value().clone())))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.tables.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(sorted_values(&self.tables.users))
    }

    async fn insert(&self, user: &NewUser) -> AppResult<User> {
        match self.tables.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Failed to create user: violates users_username_key ({})",
                user.username
            ))),
            Entry::Vacant(slot) => {
                let row = User {
                    id: UserId::new(next_id(&self.tables.user_seq)),
                    username: user.username.clone(),
                    password_hash: user.password_hash.clone(),
                    is_admin: user.is_admin,
                    created_at: Utc::now(),
                };
                self.tables.users.insert(row.id, row.clone());
                slot.insert(row.id);
                Ok(row)
            }
        }
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn find_by_id(&self, id: MovieId) -> AppResult<Option<Movie>> {
        Ok(self.tables.movies.get(&id).map(|m| m.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        Ok(sorted_values(&self.tables.movies))
    }

    async fn insert(&self, movie: &NewMovie) -> AppResult<Movie> {
        let now = Utc::now();
        let row = Movie {
            id: MovieId::new(next_id(&self.tables.movie_seq)),
            title: movie.title.clone(),
            description: movie.description.clone(),
            showtime: movie.showtime,
            created_at: now,
            updated_at: now,
        };
        self.tables.movies.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, movie: &Movie) -> AppResult<Option<Movie>> {
        Ok(self.tables.movies.get_mut(&movie.id).map(|mut row| {
            row.title = movie.title.clone();
            row.description = movie.description.clone();
            row.showtime = movie.showtime;
            row.updated_at = Utc::now();
            row.clone()
        }))
    }

    async fn delete(&self, id: MovieId) -> AppResult<bool> {
        if self.tables.movies.remove(&id).is_none() {
            return Ok(false);
        }

        // Cascade. Collect first so no two map guards are held together.
        let doomed: Vec<(BookingId, (UserId, MovieId))> = self
            .tables
            .bookings
            .iter()
            .filter(|b| b.movie_id == id)
            .map(|b| (b.id, b.value().pair()))
            .collect();

        for (booking_id, pair) in doomed {
            self.tables.booking_pairs.remove_if(&pair, |_, v| *v == booking_id);
            self.tables.bookings.remove(&booking_id);
        }
        debug!(movie_id = %id, "Cascaded bookings for deleted movie");
        Ok(true)
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn find_by_user_and_movie(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> AppResult<Option<Booking>> {
        let id = self
            .tables
            .booking_pairs
            .get(&(user_id, movie_id))
            .map(|entry| *entry.value());
        Ok(id.and_then(|id| self.tables.bookings.get(&id).map(|b| b.value().clone())))
    }

    async fn find_all_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let mut rows: Vec<Booking> = self
            .tables
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| b.value().clone())
            .collect();
        rows.sort_by_key(|b| b.id);
        Ok(rows)
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        Ok(sorted_values(&self.tables.bookings))
    }

    async fn insert(&self, booking: &NewBooking) -> AppResult<Booking> {
        if !self.tables.users.contains_key(&booking.user_id) {
            return Err(AppError::not_found(
                "Failed to create booking: violates bookings_user_id_fkey",
            ));
        }

        // Holding the movie guard keeps a concurrent delete (and its
        // cascade) from interleaving with this insert.
        let Some(_movie) = self.tables.movies.get(&booking.movie_id) else {
            return Err(AppError::not_found(
                "Failed to create booking: violates bookings_movie_id_fkey",
            ));
        };

        match self
            .tables
            .booking_pairs
            .entry((booking.user_id, booking.movie_id))
        {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Failed to create booking: violates bookings_user_id_movie_id_key",
            )),
            Entry::Vacant(slot) => {
                let row = Booking {
                    id: BookingId::new(next_id(&self.tables.booking_seq)),
                    user_id: booking.user_id,
                    movie_id: booking.movie_id,
                    created_at: Utc::now(),
                };
                self.tables.bookings.insert(row.id, row.clone());
                slot.insert(row.id);
                Ok(row)
            }
        }
    }

    async fn delete(&self, id: BookingId) -> AppResult<bool> {
        match self.tables.bookings.remove(&id) {
            Some((_, booking)) => {
                self.tables
                    .booking_pairs
                    .remove_if(&booking.pair(), |_, v| *v == id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
