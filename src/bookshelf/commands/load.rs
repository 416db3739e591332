use crate::error::Result;
use crate::store::DataStore;
use crate::view::View;
use tracing::debug;

/// Initial draw: every stored book becomes a row.
pub fn run<S: DataStore>(store: &S, view: &mut View) -> Result<()> {
    view.render_all(store)?;
    debug!(rows = view.rows().len(), "catalog loaded");
    Ok(())
}
