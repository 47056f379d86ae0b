//! Root session orchestrator.
//!
//! One `Session` owns every piece of mutable client state: the entity
//! provider, the map camera, the view-state machine, the wallet and unlock
//! ledger, chat threads, and the raffle console. Views read through the
//! accessor projections and mutate exclusively by applying [`Command`]s;
//! time-driven work (camera easing, countdown recomputation, raffle scans)
//! advances from [`Session::tick`] with an injected wall clock.

use crate::auth::{self, InvalidCredentials};
use crate::command::Command;
use crate::raffle::{RaffleConsole, SCAN_PERIOD_MS};
use crate::rooms::{ContactThread, LiveRoom};
use crate::state::ViewState;
use crate::wallet::{InsufficientBalance, UnlockLedger, Wallet};
use catalog::records::{Attendee, Capacity, CreatorId, Moment, MomentId, MomentKind};
use feed::MomentProvider;
use foundation::math::{MapPoint, Vec2};
use foundation::time::{Countdown, CountdownParts, EpochMs};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use runtime::event_bus::{Event, EventBus};
use runtime::tick::Tick;
use runtime::ticker::IntervalTicker;
use viewport::camera::MapCamera;
use viewport::picking::{self, Pin, PinKind, SurfaceGeometry};

/// Coins charged to unlock a moment's gated content.
pub const UNLOCK_COST: u32 = 5;

/// Pick radius for map clicks, in percent space.
const PICK_RADIUS_PERCENT: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub moment_id: MomentId,
    pub item_id: String,
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidLogin(InvalidCredentials),
    UnknownMoment(MomentId),
    UnknownCreator(CreatorId),
    UnknownItem {
        moment_id: MomentId,
        item_id: String,
    },
    InsufficientBalance(InsufficientBalance),
    NoMomentSelected,
    LiveRoomClosed,
    ContactThreadClosed,
    RaffleConsoleClosed,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidLogin(e) => write!(f, "{e}"),
            SessionError::UnknownMoment(id) => write!(f, "unknown moment: {id}"),
            SessionError::UnknownCreator(id) => write!(f, "unknown creator: {id}"),
            SessionError::UnknownItem { moment_id, item_id } => {
                write!(f, "moment {moment_id} has no market item {item_id}")
            }
            SessionError::InsufficientBalance(e) => write!(f, "{e}"),
            SessionError::NoMomentSelected => write!(f, "no moment is selected"),
            SessionError::LiveRoomClosed => write!(f, "the live room is not open"),
            SessionError::ContactThreadClosed => write!(f, "no contact thread is open"),
            SessionError::RaffleConsoleClosed => write!(f, "the raffle console is not open"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<InsufficientBalance> for SessionError {
    fn from(e: InsufficientBalance) -> Self {
        SessionError::InsufficientBalance(e)
    }
}

#[derive(Debug)]
pub struct Session {
    provider: MomentProvider,
    camera: MapCamera,
    geometry: SurfaceGeometry,
    view: ViewState,
    wallet: Wallet,
    ledger: UnlockLedger,
    purchases: Vec<PurchaseRecord>,
    live_room: Option<LiveRoom>,
    contact: Option<ContactThread>,
    raffle: Option<RaffleConsole>,
    countdown_target: Option<EpochMs>,
    countdown_ticker: Option<IntervalTicker>,
    countdown: Option<Countdown>,
    last_countdown_parts: Option<CountdownParts>,
    scan_ticker: Option<IntervalTicker>,
    bus: EventBus,
    tick: Tick,
    rng: StdRng,
    authenticated: bool,
    next_local_moment: u32,
}

impl Session {
    pub fn new(provider: MomentProvider, wallet: Wallet, rng_seed: u64, now_ms: EpochMs) -> Self {
        Self {
            provider,
            camera: MapCamera::new(),
            geometry: SurfaceGeometry::default(),
            view: ViewState::new(),
            wallet,
            ledger: UnlockLedger::new(),
            purchases: Vec::new(),
            live_room: None,
            contact: None,
            raffle: None,
            countdown_target: None,
            countdown_ticker: None,
            countdown: None,
            last_countdown_parts: None,
            scan_ticker: None,
            bus: EventBus::new(),
            tick: Tick::first(now_ms),
            rng: StdRng::seed_from_u64(rng_seed),
            authenticated: false,
            next_local_moment: 0,
        }
    }

    /// Session over the built-in dataset with the default wallet.
    pub fn with_mock_data(now_ms: EpochMs) -> Self {
        Self::new(MomentProvider::with_mock_data(), Wallet::default(), 0, now_ms)
    }

    // ---- projections ---------------------------------------------------

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    pub fn provider(&self) -> &MomentProvider {
        &self.provider
    }

    /// Mutable provider access for the feed driver (ingest, notifications).
    pub fn provider_mut(&mut self) -> &mut MomentProvider {
        &mut self.provider
    }

    pub fn balance(&self) -> u32 {
        self.wallet.balance()
    }

    pub fn unlocked(&self) -> &UnlockLedger {
        &self.ledger
    }

    pub fn is_unlocked(&self, id: &MomentId) -> bool {
        self.ledger.is_unlocked(id)
    }

    pub fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    pub fn live_room(&self) -> Option<&LiveRoom> {
        self.live_room.as_ref()
    }

    pub fn contact_thread(&self) -> Option<&ContactThread> {
        self.contact.as_ref()
    }

    pub fn raffle_console(&self) -> Option<&RaffleConsole> {
        self.raffle.as_ref()
    }

    /// Countdown for the selected moment's raffle, if one is armed.
    pub fn countdown(&self) -> Option<Countdown> {
        self.countdown
    }

    /// The most recent running breakdown, retained across expiry so a
    /// consumer can keep rendering the final value next to the expired
    /// state.
    pub fn last_countdown_parts(&self) -> Option<CountdownParts> {
        self.last_countdown_parts
    }

    /// Giveaway-flagged moments, in catalog order.
    pub fn trending(&self) -> Vec<&Moment> {
        self.provider.catalog().trending().collect()
    }

    /// Unlocked moments, in catalog order.
    pub fn community_feed(&self) -> Vec<&Moment> {
        self.provider
            .moments()
            .iter()
            .filter(|m| self.ledger.is_unlocked(&m.id))
            .collect()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn events(&self) -> &[Event] {
        self.bus.events()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.bus.drain()
    }

    // ---- continuous gestures -------------------------------------------

    // Pointer and touch streams bypass the command surface: they are
    // high-frequency camera-only inputs with no session-level semantics.

    pub fn pointer_down(&mut self, pos_px: Vec2) {
        self.camera.pointer_down(pos_px);
    }

    pub fn pointer_move(&mut self, pos_px: Vec2) {
        self.camera.pointer_move(pos_px);
    }

    pub fn pointer_up(&mut self) {
        self.camera.pointer_up();
    }

    pub fn wheel(&mut self, delta: f64) {
        self.camera.wheel(delta);
    }

    pub fn touch_start(&mut self, a_px: Vec2, b_px: Vec2) {
        self.camera.touch_start(a_px, b_px);
    }

    pub fn touch_move(&mut self, a_px: Vec2, b_px: Vec2) {
        self.camera.touch_move(a_px, b_px);
    }

    pub fn touch_end(&mut self) {
        self.camera.touch_end();
    }

    // ---- time ----------------------------------------------------------

    /// Advances the session clock: camera easing, countdown recomputation
    /// at 1 Hz, and raffle scan steps while a draw is running.
    pub fn tick(&mut self, now_ms: EpochMs) {
        let prev = self.tick;
        self.tick = prev.next(now_ms);
        let dt = self.tick.seconds_since(prev);
        self.camera.update(dt);

        let countdown_fires = self
            .countdown_ticker
            .as_mut()
            .map(|t| t.poll(self.tick.at_ms))
            .unwrap_or(0);
        if countdown_fires > 0 {
            self.recompute_countdown();
        }

        let scans = self
            .scan_ticker
            .as_mut()
            .map(|t| t.poll(self.tick.at_ms))
            .unwrap_or(0);
        for _ in 0..scans {
            let Some(console) = self.raffle.as_mut() else {
                break;
            };
            if let Some(winner) = console.advance_scan(&mut self.rng) {
                let winner = winner.to_string();
                self.bus
                    .emit(self.tick, "raffle", format!("winner {winner}"));
                self.scan_ticker = None;
                break;
            }
        }
    }

    // ---- commands ------------------------------------------------------

    pub fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::Login { email, password } => self.login(&email, &password),
            Command::SelectMoment { id } => self.select_moment(id),
            Command::CloseDetail => {
                self.view.close_detail();
                self.raffle = None;
                self.scan_ticker = None;
                self.disarm_countdown();
                Ok(())
            }
            Command::SelectCreator { id } => self.select_creator(id),
            Command::CloseContact => {
                self.view.close_contact();
                self.contact = None;
                Ok(())
            }
            Command::SwitchTab { tab } => {
                // A no-op unless a moment detail is open.
                self.view.switch_tab(tab);
                Ok(())
            }
            Command::SetPostDetail { open } => {
                self.view.set_post_detail(open);
                Ok(())
            }
            Command::OpenLiveRoom => self.open_live_room(),
            Command::CloseLiveRoom => {
                self.view.set_live_room_open(false);
                self.live_room = None;
                Ok(())
            }
            Command::OpenRaffleConsole => self.open_raffle_console(),
            Command::CloseRaffleConsole => {
                self.view.close_raffle_console();
                self.raffle = None;
                self.scan_ticker = None;
                Ok(())
            }
            Command::OpenLightbox { id } => {
                if self.provider.moment(&id).is_none() {
                    return Err(SessionError::UnknownMoment(id));
                }
                self.view.open_lightbox(id);
                Ok(())
            }
            Command::CloseLightbox => {
                self.view.close_lightbox();
                Ok(())
            }
            Command::FocusLocation { x, y } => {
                self.camera.focus(MapPoint::new(x, y));
                Ok(())
            }
            Command::ClickMap { x_px, y_px } => self.click_map(Vec2::new(x_px, y_px)),
            Command::Resize {
                width_px,
                height_px,
            } => {
                self.geometry = SurfaceGeometry::for_viewport(width_px, height_px);
                Ok(())
            }
            Command::AttemptUnlock { id } => self.attempt_unlock(id),
            Command::PurchaseItem { moment_id, item_id } => {
                self.purchase_item(moment_id, item_id)
            }
            Command::CreateMoment => self.create_moment(),
            Command::SendLiveMessage { body } => {
                let Some(room) = self.live_room.as_mut() else {
                    return Err(SessionError::LiveRoomClosed);
                };
                room.send(&body);
                Ok(())
            }
            Command::SendContactMessage { body } => {
                let Some(thread) = self.contact.as_mut() else {
                    return Err(SessionError::ContactThreadClosed);
                };
                thread.send(&body);
                Ok(())
            }
            Command::StartRaffleDraw => self.start_raffle_draw(),
        }
    }

    fn login(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        match auth::check_credentials(email, password) {
            Ok(()) => {
                self.authenticated = true;
                self.bus.emit(self.tick, "auth", "login ok");
                Ok(())
            }
            Err(e) => Err(SessionError::InvalidLogin(e)),
        }
    }

    fn select_moment(&mut self, id: MomentId) -> Result<(), SessionError> {
        let Some(moment) = self.provider.moment(&id) else {
            return Err(SessionError::UnknownMoment(id));
        };
        let raffle_close = moment.raffle_close_ms();
        let title = moment.title.clone();

        self.view.select_moment(id.clone());
        // The console and its draw belong to the previous selection.
        self.view.close_raffle_console();
        self.raffle = None;
        self.scan_ticker = None;
        self.arm_countdown(raffle_close);
        self.bus
            .emit(self.tick, "selection", format!("moment {id}: {title}"));
        Ok(())
    }

    fn select_creator(&mut self, id: CreatorId) -> Result<(), SessionError> {
        if self.provider.creator(&id).is_none() {
            return Err(SessionError::UnknownCreator(id));
        }
        self.view.select_creator(id.clone());
        if self.contact.as_ref().map(|t| t.creator_id()) != Some(&id) {
            self.contact = Some(ContactThread::open(id.clone()));
        }
        self.bus
            .emit(self.tick, "selection", format!("creator {id}"));
        Ok(())
    }

    fn open_live_room(&mut self) -> Result<(), SessionError> {
        let Some(id) = self.view.selected_moment().cloned() else {
            return Err(SessionError::NoMomentSelected);
        };
        self.view.set_live_room_open(true);
        if self.live_room.as_ref().map(|r| r.moment_id()) != Some(&id) {
            self.live_room = Some(LiveRoom::open(id));
        }
        Ok(())
    }

    fn open_raffle_console(&mut self) -> Result<(), SessionError> {
        let Some(id) = self.view.selected_moment().cloned() else {
            return Err(SessionError::NoMomentSelected);
        };
        self.view.open_raffle_console();
        self.materialize_raffle_console(&id);
        Ok(())
    }

    fn start_raffle_draw(&mut self) -> Result<(), SessionError> {
        let started = match self.raffle.as_mut() {
            Some(console) => console.start_draw(),
            None => return Err(SessionError::RaffleConsoleClosed),
        };
        if started {
            self.scan_ticker = Some(IntervalTicker::new(SCAN_PERIOD_MS, self.tick.at_ms));
            self.bus.emit(self.tick, "raffle", "draw started");
        }
        Ok(())
    }

    fn attempt_unlock(&mut self, id: MomentId) -> Result<(), SessionError> {
        let Some(moment) = self.provider.moment(&id) else {
            return Err(SessionError::UnknownMoment(id));
        };
        // Unlocking an already-unlocked moment never double-charges.
        if self.ledger.is_unlocked(&id) {
            return Ok(());
        }
        let is_giveaway = moment.is_giveaway();

        if let Err(e) = self.wallet.try_spend(UNLOCK_COST) {
            self.bus.emit(self.tick, "notice", e.to_string());
            return Err(e.into());
        }
        self.ledger.unlock(id.clone());
        self.bus
            .emit(self.tick, "unlock", format!("moment {id} unlocked"));
        self.bus
            .emit(self.tick, "celebrate", format!("unlock {id}"));

        // A freshly unlocked giveaway drops the user straight into its
        // raffle console, provided it is the moment on screen.
        if is_giveaway
            && self.view.selected_moment() == Some(&id)
            && self.view.open_raffle_console()
        {
            self.materialize_raffle_console(&id);
        }
        Ok(())
    }

    fn purchase_item(&mut self, moment_id: MomentId, item_id: String) -> Result<(), SessionError> {
        let Some(moment) = self.provider.moment(&moment_id) else {
            return Err(SessionError::UnknownMoment(moment_id));
        };
        let Some(item) = moment.market_item(&item_id) else {
            return Err(SessionError::UnknownItem { moment_id, item_id });
        };
        let name = item.name.clone();
        let price = item.price;

        if let Err(e) = self.wallet.try_spend(price) {
            self.bus.emit(self.tick, "notice", e.to_string());
            return Err(e.into());
        }
        self.purchases.push(PurchaseRecord {
            moment_id,
            item_id,
            name: name.clone(),
            price,
        });
        self.bus
            .emit(self.tick, "purchase", format!("{name} for {price}"));
        self.bus
            .emit(self.tick, "celebrate", format!("purchase {name}"));
        Ok(())
    }

    fn create_moment(&mut self) -> Result<(), SessionError> {
        self.next_local_moment += 1;
        let id = MomentId::new(format!("local-{}", self.next_local_moment));
        let x = 50.0 + (self.rng.random::<f64>() - 0.5) * 20.0;
        let y = 50.0 + (self.rng.random::<f64>() - 0.5) * 20.0;

        let moment = Moment {
            id: id.clone(),
            title: "New Community Drop".to_string(),
            host: "You".to_string(),
            avatar_url: "/avatar-host.png".to_string(),
            real_photo_url: None,
            creator_id: None,
            description: None,
            special_offer: None,
            comments: Vec::new(),
            capacity: Capacity { current: 1, max: 100 },
            attendees: vec![Attendee {
                name: "You".to_string(),
                avatar_url: "/avatar-host.png".to_string(),
            }],
            viewers: 1,
            time_left_label: Some("24h".to_string()),
            kind: MomentKind::Open,
            x,
            y,
            zone: "Realtime".to_string(),
            tags: vec!["New".to_string(), "Live".to_string()],
            giveaway: None,
            shop: None,
            voice_url: None,
            unlocked_image_url: None,
        };
        let position = moment.position();

        self.provider.add_moment(moment);
        self.camera.focus(position);
        self.bus.emit(self.tick, "create", format!("moment {id}"));
        self.select_moment(id)
    }

    fn click_map(&mut self, cursor_px: Vec2) -> Result<(), SessionError> {
        let pins = self.collect_pins();
        let Some(hit) = picking::pick_pin(
            &pins,
            cursor_px,
            self.geometry,
            &self.camera,
            PICK_RADIUS_PERCENT,
        ) else {
            return Ok(());
        };

        match hit.kind {
            PinKind::Moment => self.select_moment(MomentId::new(hit.id)),
            PinKind::Creator => {
                let creator_id = CreatorId::new(hit.id);
                let hosted = self
                    .provider
                    .catalog()
                    .hosted_by(&creator_id)
                    .next()
                    .map(|m| m.id.clone());
                // A creator pin with hosted moments opens the first of
                // them; otherwise it opens the contact view.
                match hosted {
                    Some(moment_id) => self.select_moment(moment_id),
                    None => self.select_creator(creator_id),
                }
            }
        }
    }

    fn collect_pins(&self) -> Vec<Pin> {
        let mut pins = Vec::with_capacity(
            self.provider.moments().len() + self.provider.creators().len(),
        );
        for m in self.provider.moments() {
            pins.push(Pin {
                kind: PinKind::Moment,
                id: m.id.0.clone(),
                position: m.position(),
            });
        }
        for c in self.provider.creators() {
            pins.push(Pin {
                kind: PinKind::Creator,
                id: c.id.0.clone(),
                position: c.position(),
            });
        }
        pins
    }

    fn materialize_raffle_console(&mut self, id: &MomentId) {
        if self.raffle.is_some() {
            return;
        }
        if let Some(moment) = self.provider.moment(id) {
            self.raffle = Some(RaffleConsole::open(moment, &mut self.rng));
        }
    }

    fn arm_countdown(&mut self, close_ms: Option<EpochMs>) {
        self.last_countdown_parts = None;
        match close_ms {
            Some(target) => {
                self.countdown_target = Some(target);
                self.countdown_ticker = Some(IntervalTicker::every_second(self.tick.at_ms));
                self.recompute_countdown();
            }
            None => self.disarm_countdown(),
        }
    }

    fn disarm_countdown(&mut self) {
        self.countdown_target = None;
        self.countdown_ticker = None;
        self.countdown = None;
        self.last_countdown_parts = None;
    }

    fn recompute_countdown(&mut self) {
        if let Some(target) = self.countdown_target {
            let countdown = Countdown::at(target, self.tick.at_ms);
            if let Some(parts) = countdown.parts() {
                self.last_countdown_parts = Some(parts);
            }
            self.countdown = Some(countdown);
        }
    }
}
