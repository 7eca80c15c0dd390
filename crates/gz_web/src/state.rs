use gz_client::NoticeService;

pub struct AppState {
    pub notices: NoticeService,
}
