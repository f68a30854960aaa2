//! Tests for route recognition and chat id extraction.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use uuid::Uuid;
    use yew_router::Routable;

    #[test]
    fn recognizes_chat_routes() {
        let chat_id = Uuid::new_v4();
        assert_eq!(MainRoute::recognize("/chat"), Some(MainRoute::NewChat));
        assert_eq!(
            MainRoute::recognize(&format!("/chat/{chat_id}")),
            Some(MainRoute::Chat { chat_id })
        );
    }

    #[test]
    fn malformed_chat_id_is_not_found() {
        assert_eq!(
            MainRoute::recognize("/chat/not-a-uuid"),
            Some(MainRoute::NotFound)
        );
        assert_eq!(MainRoute::recognize("/settings"), Some(MainRoute::NotFound));
    }

    #[test]
    fn chat_path_round_trips() {
        let chat_id = Uuid::new_v4();
        let route = MainRoute::Chat { chat_id };
        assert_eq!(route.to_path(), format!("/chat/{chat_id}"));
        assert_eq!(route.chat_id(), Some(chat_id));
        assert_eq!(MainRoute::NewChat.chat_id(), None);
    }
}
