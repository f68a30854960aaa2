use shared::chats::ChatList;
use yewdux::Store;

/// The sidebar's chat list.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct ChatsState {
    pub chats: ChatList,
    /// False until the first successful fetch.
    pub loaded: bool,
}
