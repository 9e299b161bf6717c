use leptos::html;
use leptos::prelude::*;

use crate::core::content::PRODUCT_NAME;
use crate::ui::common::{Button, ButtonSize, ButtonVariant, Modal, ModalSize};
use crate::ui::icon::{Icon, icons};

const DEMO_VIDEO_SRC: &str = "/demo-video.mp4";

const DEMO_FACTS: [(&str, &str, &str); 3] = [
    ("5 min", "Demo Length", "text-blue-400"),
    ("6", "Key Features", "text-purple-400"),
    ("Live", "Real Platform", "text-green-400"),
];

/// Product demo player in a modal
///
/// Starts playing (muted) when opened and pauses when closed.
#[component]
pub fn DemoVideo(is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let video_ref = NodeRef::<html::Video>::new();
    let (is_playing, set_is_playing) = signal(false);
    let (is_muted, set_is_muted) = signal(true);
    let (is_fullscreen, set_is_fullscreen) = signal(false);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let open = is_open.get();
        if let Some(video) = video_ref.get_untracked() {
            if open {
                let _ = video.play();
            } else {
                let _ = video.pause();
            }
        }
    });

    let toggle_play = move || {
        #[cfg(not(feature = "ssr"))]
        if let Some(video) = video_ref.get_untracked() {
            if is_playing.get_untracked() {
                let _ = video.pause();
            } else {
                let _ = video.play();
            }
        }
        set_is_playing.update(|p| *p = !*p);
    };

    let toggle_mute = move || {
        let muted = !is_muted.get_untracked();
        #[cfg(not(feature = "ssr"))]
        if let Some(video) = video_ref.get_untracked() {
            video.set_muted(muted);
        }
        set_is_muted.set(muted);
    };

    let toggle_fullscreen = move || {
        let entering = !is_fullscreen.get_untracked();
        #[cfg(not(feature = "ssr"))]
        {
            if entering {
                if let Some(video) = video_ref.get_untracked() {
                    if let Err(e) = video.request_fullscreen() {
                        leptos::logging::warn!("Fullscreen request failed: {:?}", e);
                    }
                }
            } else {
                document().exit_fullscreen();
            }
        }
        set_is_fullscreen.set(entering);
    };

    view! {
        <Modal is_open=is_open on_close=on_close size=ModalSize::ExtraLarge class="bg-black overflow-hidden">
            <div class="relative bg-black rounded-lg overflow-hidden">
                <div class="relative aspect-video bg-gray-900">
                    // Poster shown behind the (transparent) video element
                    <div class="absolute inset-0 bg-gradient-to-br from-blue-900 via-purple-900 to-pink-900">
                        <div class="flex items-center justify-center h-full">
                            <div class="text-center text-white">
                                <Icon name=icons::PLAY class="w-16 h-16 mx-auto mb-4" />
                                <h3 class="text-2xl font-bold mb-2">{format!("{} Demo", PRODUCT_NAME)}</h3>
                                <p class="text-gray-300">"Experience the power of AI-driven marketing"</p>
                            </div>
                        </div>
                    </div>

                    <video
                        node_ref=video_ref
                        class="absolute inset-0 w-full h-full object-cover opacity-0"
                        prop:muted=move || is_muted.get()
                        playsinline=true
                        on:play=move |_| set_is_playing.set(true)
                        on:pause=move |_| set_is_playing.set(false)
                        on:ended=move |_| set_is_playing.set(false)
                    >
                        <source src=DEMO_VIDEO_SRC type="video/mp4" />
                    </video>

                    <Show when=move || !is_playing.get()>
                        <div
                            class="absolute inset-0 flex items-center justify-center bg-black/20 cursor-pointer"
                            on:click=move |_| toggle_play()
                        >
                            <div class="w-20 h-20 bg-white/90 rounded-full flex items-center justify-center shadow-2xl hover:scale-110 transition-transform">
                                <Icon name=icons::PLAY class="w-8 h-8 text-black ml-1" />
                            </div>
                        </div>
                    </Show>

                    // Controls
                    <div class="absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/80 to-transparent p-4">
                        <div class="flex items-center justify-between">
                            <div class="flex items-center gap-4">
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Icon
                                    aria_label="Play or pause"
                                    class="text-white hover:bg-white/20".to_string()
                                    on_click=Callback::new(move |_| toggle_play())
                                >
                                    {move || if is_playing.get() {
                                        view! { <Icon name=icons::PAUSE class="w-4 h-4" /> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::PLAY class="w-4 h-4" /> }.into_any()
                                    }}
                                </Button>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Icon
                                    aria_label="Mute or unmute"
                                    class="text-white hover:bg-white/20".to_string()
                                    on_click=Callback::new(move |_| toggle_mute())
                                >
                                    {move || if is_muted.get() {
                                        view! { <Icon name=icons::VOLUME_OFF class="w-4 h-4" /> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::VOLUME class="w-4 h-4" /> }.into_any()
                                    }}
                                </Button>
                                <div class="text-white text-sm">{format!("{} - Product Demo", PRODUCT_NAME)}</div>
                            </div>

                            <div class="flex items-center gap-2">
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Icon
                                    aria_label="Toggle fullscreen"
                                    class="text-white hover:bg-white/20".to_string()
                                    on_click=Callback::new(move |_| toggle_fullscreen())
                                >
                                    {move || if is_fullscreen.get() {
                                        view! { <Icon name=icons::MINIMIZE class="w-4 h-4" /> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::MAXIMIZE class="w-4 h-4" /> }.into_any()
                                    }}
                                </Button>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="p-6 bg-gray-900 text-white">
                    <h3 class="text-xl font-semibold mb-2">{format!("See {} in Action", PRODUCT_NAME)}</h3>
                    <p class="text-gray-300 mb-4">
                        "Watch how our AI-powered platform transforms marketing workflows, \
                         from content creation to campaign optimization, in just minutes."
                    </p>

                    <div class="grid grid-cols-3 gap-4 text-center">
                        {DEMO_FACTS.iter().map(|(value, label, color)| view! {
                            <div>
                                <div class=format!("text-2xl font-bold {}", color)>{*value}</div>
                                <div class="text-sm text-gray-400">{*label}</div>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="mt-6 flex gap-4">
                        <a href="#pricing" class="flex-1" on:click=move |_| on_close.run(())>
                            <Button variant=ButtonVariant::Gradient class="w-full".to_string()>
                                "Start Free Trial"
                            </Button>
                        </a>
                        <a href="#contact" class="flex-1" on:click=move |_| on_close.run(())>
                            <Button variant=ButtonVariant::Outline class="w-full border-gray-600 text-white hover:bg-gray-800".to_string()>
                                "Schedule Live Demo"
                            </Button>
                        </a>
                    </div>
                </div>
            </div>
        </Modal>
    }
}
