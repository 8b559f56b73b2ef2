//! 파일시스템 서비스 (권한 있는 쪽)
//!
//! 요청마다 기본 연산 하나를 수행하고 결과는 로그로만 남긴다.
//! 실패를 UI에 돌려주지 않고, 재시도하지 않으며, 같은 경로에 대한
//! 동시 요청도 직렬화하지 않는다.

use crate::ipc::{Event, EventSender, Request, ServicePort};
use crate::models::dir_entry::NewItem;
use crate::models::landing::Favorite;
use crate::models::tab_state::TabId;
use crate::system::favorites::FavoritesStore;
use crate::system::filesystem::FileSystem;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;

/// 복사해 둔 항목
#[derive(Debug, Clone, PartialEq, Eq)]
struct Clipboard {
    dir: PathBuf,
    names: Vec<String>,
}

impl Clipboard {
    fn sources(&self) -> Vec<PathBuf> {
        self.names.iter().map(|n| self.dir.join(n)).collect()
    }
}

pub struct FsService {
    fs: FileSystem,
    favorites: FavoritesStore,
    clipboard: Option<Clipboard>,
}

impl FsService {
    pub fn new(favorites: FavoritesStore) -> Self {
        Self {
            fs: FileSystem::new(),
            favorites,
            clipboard: None,
        }
    }

    /// 채널이 닫힐 때까지 요청 처리
    pub async fn run(mut self, mut port: ServicePort) {
        log::info!("filesystem service started");
        while let Some(request) = port.requests.recv().await {
            // 작업은 기다리지 않는다
            let _ = self.handle(request, &port.events);
        }
        log::info!("filesystem service stopped");
    }

    /// 요청 하나 처리. 띄운 백그라운드 작업 핸들을 돌려준다
    pub fn handle(&mut self, request: Request, events: &EventSender) -> Vec<JoinHandle<()>> {
        log::debug!("request: {:?}", request);
        match request {
            Request::CreateFileOrDir => {
                events.send(Event::FileOrDirCreated);
                Vec::new()
            }
            Request::NewFile { dir, name } => self
                .spawn_create(&dir, NewItem::file(name))
                .into_iter()
                .collect(),
            Request::NewFolder { dir, name } => self
                .spawn_create(&dir, NewItem::folder(name))
                .into_iter()
                .collect(),
            Request::NewMany { dir, items } => {
                let handles: Vec<_> = items
                    .into_iter()
                    .filter_map(|item| self.spawn_create(&dir, item))
                    .collect();
                log::info!("creation procedure complete ({} dispatched)", handles.len());
                handles
            }
            Request::OpenDirectory {
                tab_id,
                path,
                in_new_tab,
            } => vec![self.spawn_open(tab_id, path, in_new_tab, events.clone())],
            Request::GetDrives => {
                let fs = self.fs;
                let events = events.clone();
                vec![tokio::task::spawn_blocking(move || {
                    events.send(Event::DrivesListed(fs.list_drives()));
                })]
            }
            Request::GetFavorites => vec![self.spawn_favorites(events.clone(), FavoriteEdit::None)],
            Request::AddFavorite { path } => {
                vec![self.spawn_favorites(events.clone(), FavoriteEdit::Add(path))]
            }
            Request::RemoveFavorite { id } => {
                vec![self.spawn_favorites(events.clone(), FavoriteEdit::Remove(id))]
            }
            Request::CopiedFile { dir, names } => {
                log::info!("copied {} item(s) from {}", names.len(), dir.display());
                self.clipboard = Some(Clipboard { dir, names });
                Vec::new()
            }
            Request::PastedFile { dir } => match &self.clipboard {
                Some(clipboard) if !clipboard.names.is_empty() => {
                    vec![self.spawn_paste(clipboard.sources(), dir, events.clone())]
                }
                _ => {
                    log::info!("nothing to paste into {}", dir.display());
                    Vec::new()
                }
            },
            Request::Menu(command) => {
                events.send(command.into());
                Vec::new()
            }
        }
    }

    fn spawn_create(&self, dir: &Path, item: NewItem) -> Option<JoinHandle<()>> {
        let path = match self.fs.join_child(dir, &item.name) {
            Ok(path) => path,
            Err(err) => {
                log::error!("cannot create {:?} in {}: {}", item.name, dir.display(), err);
                return None;
            }
        };

        let fs = self.fs;
        Some(tokio::task::spawn_blocking(move || {
            let (kind, result) = if item.is_file {
                ("File", fs.create_file(&path))
            } else {
                ("Folder", fs.create_folder(&path))
            };
            match result {
                Ok(()) => log::info!("{} created: {}", kind, path.display()),
                Err(err) => log::error!("error creating {}: {}", path.display(), err),
            }
        }))
    }

    fn spawn_open(
        &self,
        tab_id: TabId,
        path: PathBuf,
        in_new_tab: bool,
        events: EventSender,
    ) -> JoinHandle<()> {
        let fs = self.fs;
        tokio::task::spawn_blocking(move || match fs.read_directory(&path) {
            Ok(content) => events.send(Event::DirectoryOpened {
                tab_id,
                path,
                content,
                in_new_tab,
            }),
            Err(err) => log::error!("cannot open {}: {}", path.display(), err),
        })
    }

    fn spawn_paste(&self, sources: Vec<PathBuf>, dir: PathBuf, events: EventSender) -> JoinHandle<()> {
        let fs = self.fs;
        tokio::task::spawn_blocking(move || {
            for (src, result) in fs.copy_into(&sources, &dir) {
                match result {
                    Ok(bytes) => log::info!("pasted {} ({} bytes)", src.display(), bytes),
                    Err(err) => log::error!("paste of {} failed: {}", src.display(), err),
                }
            }
            events.send(Event::EditActionComplete { dir });
        })
    }

    fn spawn_favorites(&self, events: EventSender, edit: FavoriteEdit) -> JoinHandle<()> {
        let fs = self.fs;
        let store = self.favorites.clone();
        tokio::task::spawn_blocking(move || {
            let paths = match edit {
                FavoriteEdit::None => Ok(store.load()),
                FavoriteEdit::Add(path) => store.add(&path),
                FavoriteEdit::Remove(id) => store.remove(&id),
            };
            let paths = match paths {
                Ok(paths) => paths,
                Err(err) => {
                    log::error!("cannot update favorites: {}", err);
                    store.load()
                }
            };
            let favorites: Vec<Favorite> = paths
                .iter()
                .filter_map(|p| {
                    let resolved = fs.resolve_favorite(p);
                    if resolved.is_none() {
                        log::debug!("favorite {} no longer exists", p.display());
                    }
                    resolved
                })
                .collect();
            events.send(Event::FavoritesListed(favorites));
        })
    }
}

enum FavoriteEdit {
    None,
    Add(PathBuf),
    Remove(String),
}
