// src/flux.rs
//
// Flux : file à consommateur unique avec worker dédié.
//
// Contrat:
// - `ajouter` empile un élément (canal non borné : PAS de backpressure,
//   c'est au producteur de se modérer)
// - `pour_chaque` enregistre L'action de traitement (un seul slot par flux) ;
//   les éléments arrivés avant restent en attente et sont drainés dès
//   l'enregistrement
// - `appliquer` chaîne un second flux : l'action transforme chaque élément
//   et Some(u) alimente l'aval, None est abandonné
// - `arreter` : annulation coopérative — les éléments déjà en file sont
//   traités, puis le worker sort et est joint (idem au Drop)
//
// Le worker bloque sur le canal (pas de boucle de scrutation).
// Composant indépendant du noyau d'évaluation : aucun état partagé avec lui.

use std::collections::VecDeque;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};

type Action<T> = Box<dyn FnMut(T) + Send>;

enum Message<T> {
    Element(T),
    Action(Action<T>),
    Stop,
}

pub struct Flux<T: Send + 'static> {
    tx: Sender<Message<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Flux<T> {
    /// Crée le flux et démarre son worker.
    pub fn nouveau() -> Self {
        let (tx, rx) = unbounded::<Message<T>>();
        let worker = thread::spawn(move || boucle_worker(rx));
        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Empile un élément. Sans effet (journalisé) si le flux est arrêté.
    pub fn ajouter(&self, element: T) {
        if self.tx.send(Message::Element(element)).is_err() {
            log::warn!("flux arrêté: élément ignoré");
        }
    }

    /// Enregistre l'action de traitement par élément.
    /// Un seul slot : un nouvel appel remplace l'action précédente.
    pub fn pour_chaque<F>(&self, action: F)
    where
        F: FnMut(T) + Send + 'static,
    {
        if self.tx.send(Message::Action(Box::new(action))).is_err() {
            log::warn!("flux arrêté: action ignorée");
        }
    }

    /// Chaîne un étage aval : `f` transforme chaque élément ;
    /// Some(u) est poussé dans le flux retourné, None est abandonné.
    /// Occupe le slot d'action de CE flux.
    pub fn appliquer<U, F>(&self, mut f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Option<U> + Send + 'static,
    {
        let aval = Flux::nouveau();
        let tx_aval = aval.tx.clone();

        self.pour_chaque(move |x| {
            if let Some(u) = f(x) {
                if tx_aval.send(Message::Element(u)).is_err() {
                    log::warn!("flux aval arrêté: élément transformé perdu");
                }
            }
        });

        aval
    }

    /// Arrêt coopératif : les éléments déjà en file sont traités,
    /// puis le worker sort. Idempotent.
    pub fn arreter(&mut self) {
        let _ = self.tx.send(Message::Stop);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("worker du flux terminé en panique");
            }
        }
    }
}

impl<T: Send + 'static> Drop for Flux<T> {
    fn drop(&mut self) {
        self.arreter();
    }
}

/// Boucle du worker : réception bloquante, pas de scrutation.
/// Les éléments reçus avant l'action sont mis en attente locale.
fn boucle_worker<T>(rx: Receiver<Message<T>>) {
    let mut action: Option<Action<T>> = None;
    let mut en_attente: VecDeque<T> = VecDeque::new();

    log::debug!("flux: worker démarré");

    for msg in rx {
        match msg {
            Message::Element(x) => match action.as_mut() {
                Some(f) => f(x),
                None => en_attente.push_back(x),
            },

            Message::Action(mut f) => {
                // draine l'arriéré avant d'installer l'action
                while let Some(x) = en_attente.pop_front() {
                    f(x);
                }
                action = Some(f);
            }

            Message::Stop => break,
        }
    }

    log::debug!("flux: worker arrêté ({} élément(s) en attente)", en_attente.len());
}
