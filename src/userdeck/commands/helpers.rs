use crate::error::Result;
use crate::index::{select_user, DisplayUser};
use crate::store::{KeyValueBackend, UserStore};

/// Resolves an id or list position against the current contents of the store.
pub fn resolve_user<B: KeyValueBackend>(
    store: &UserStore<B>,
    selector: &str,
) -> Result<DisplayUser> {
    let users = store.try_list_all()?;
    select_user(&users, selector)
}
