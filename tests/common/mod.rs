use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn maybe_setup_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Reads `c1..c{width}` of every row of `table`, in insertion order.
pub fn read_rows(conn: &rusqlite::Connection, table: &str, width: usize) -> Vec<Vec<f64>> {
    let columns = (1..=width)
        .map(|i| format!("c{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut stmt = conn
        .prepare(&format!("SELECT {columns} FROM {table} ORDER BY rowid"))
        .unwrap();
    stmt.query_map([], |row| {
        (0..width)
            .map(|i| row.get::<_, f64>(i))
            .collect::<Result<Vec<_>, _>>()
    })
    .unwrap()
    .collect::<Result<Vec<_>, _>>()
    .unwrap()
}

/// Rows ordered lexicographically, for comparing results whose row order the
/// database does not guarantee.
pub fn sorted(mut rows: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    rows.sort_by(|a, b| a.partial_cmp(b).unwrap());
    rows
}

/// Integer-valued entries keep every sum exact.
#[allow(dead_code)]
pub fn random_matrix(rng: &mut ChaCha8Rng, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-10..=10) as f64).collect())
        .collect()
}

/// Row-aligned product: rows of `a` and `b` are paired by position and
/// `c[r][j] = sum_i a[r][i] * b[r][j]` for every position present in both.
#[allow(dead_code)]
pub fn row_aligned_product(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    a.iter()
        .zip(b)
        .map(|(a_row, b_row)| {
            let a_sum: f64 = a_row.iter().sum();
            b_row.iter().map(|b_value| a_sum * b_value).collect()
        })
        .collect()
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
