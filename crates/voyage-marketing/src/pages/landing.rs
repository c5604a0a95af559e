//! Landing page

use leptos::*;
use voyage_core::{PageSection, RevealConfig};
use crate::components::*;
use crate::reveal::provide_reveal_tracker;

#[component]
pub fn LandingPage() -> impl IntoView {
    let reveal = provide_reveal_tracker(RevealConfig::default());

    view! {
        <div>
            // Hero Section
            <section
                id={PageSection::Hero.id()}
                data-animate=""
                class="bg-gradient-to-br from-purple-50 to-violet-100 py-20"
            >
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class=move || format!(
                        "text-center transition-all duration-1000 {}",
                        reveal.class(PageSection::Hero, 0)
                    )>
                        <h1 class="text-5xl md:text-6xl font-bold text-gray-900 mb-6 animate-fadeInUp">
                            "Your Personal AI Travel Agent"
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto animate-fadeInUp animation-delay-200">
                            "Skip the endless research and overwhelming options. VoyageAI crafts personalized "
                            "travel experiences in seconds, books everything instantly, and saves you both "
                            "time and money on every trip."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center animate-fadeInUp animation-delay-400">
                            <button class="bg-purple-600 text-white px-8 py-4 rounded-xl text-lg font-semibold hover:bg-purple-700 transition-all duration-300 flex items-center justify-center hover:scale-105 hover:shadow-xl transform active:scale-95 group">
                                "Plan My Dream Trip"
                                <ChevronRightIcon/>
                            </button>
                            <button class="border-2 border-gray-300 text-gray-700 px-8 py-4 rounded-xl text-lg font-semibold hover:border-gray-400 transition-all duration-300 hover:scale-105 hover:shadow-lg transform active:scale-95">
                                "Watch Demo"
                            </button>
                        </div>
                        <p class="text-sm text-gray-500 mt-4 animate-fadeInUp animation-delay-600">
                            "Free 7-day trial • No credit card required"
                        </p>
                    </div>
                </div>
            </section>

            // Trust Indicators
            <section
                id={PageSection::Trust.id()}
                data-animate=""
                class="py-8 bg-white border-b border-gray-100"
            >
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class=move || format!(
                        "text-center text-gray-500 text-sm mb-6 transition-all duration-800 {}",
                        reveal.class(PageSection::Trust, 0)
                    )>
                        "Trusted by 50,000+ travelers worldwide"
                    </p>
                    <div class=move || format!(
                        "flex items-center justify-center space-x-8 opacity-60 transition-all duration-1000 {}",
                        reveal.class(PageSection::Trust, 200)
                    )>
                        <TrustBadge icon=icons::SHIELD label="256-bit SSL"/>
                        <div class="w-px h-8 bg-gray-300"></div>
                        <TrustBadge icon=icons::STAR label="4.9/5 Rating"/>
                        <div class="w-px h-8 bg-gray-300"></div>
                        <TrustBadge icon=icons::USERS label="24/7 Support"/>
                    </div>
                </div>
            </section>

            // Features
            <section id={PageSection::Features.id()} data-animate="" class="py-20 bg-gray-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionHeading
                        section=PageSection::Features
                        title="Why Choose VoyageAI?"
                        subtitle="Experience the future of travel planning with AI that understands your preferences better than you do."
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <FeatureCard
                            icon=icons::CLOCK
                            icon_class="h-8 w-8 text-purple-600"
                            badge="bg-purple-100"
                            title="24/7 AI Assistant"
                            description="Get instant travel recommendations, bookings, and support any time of day. No waiting for business hours or human agents."
                            delay=200
                        />
                        <FeatureCard
                            icon=icons::ZAP
                            icon_class="h-8 w-8 text-violet-600"
                            badge="bg-violet-100"
                            title="Lightning-Fast Planning"
                            description="Complete travel itineraries created in under 60 seconds. From flights to hotels to activities - all perfectly coordinated."
                            delay=400
                        />
                        <FeatureCard
                            icon=icons::MAP_PIN
                            icon_class="h-8 w-8 text-indigo-600"
                            badge="bg-indigo-100"
                            title="Hyper-Personalized"
                            description="AI learns from your preferences, past trips, and behavior to suggest destinations and experiences you'll absolutely love."
                            delay=600
                        />
                        <FeatureCard
                            icon=icons::CREDIT_CARD
                            icon_class="h-8 w-8 text-purple-700"
                            badge="bg-purple-200"
                            title="Guaranteed Best Prices"
                            description="Our AI compares millions of options in real-time to find deals you'd never discover on your own. Save up to 40% on every trip."
                            delay=800
                        />
                        <FeatureCard
                            icon=icons::SHIELD
                            icon_class="h-8 w-8 text-violet-700"
                            badge="bg-violet-200"
                            title="Complete Trip Protection"
                            description="Automatic rebooking for cancellations, real-time alerts for delays, and instant support when travel plans change."
                            delay=1000
                        />
                        <FeatureCard
                            icon=icons::HEADPHONES
                            icon_class="h-8 w-8 text-purple-800"
                            badge="bg-purple-300"
                            title="Human + AI Support"
                            description="When you need human touch, our travel experts are available 24/7 to handle complex requests and special circumstances."
                            delay=1200
                        />
                    </div>
                </div>
            </section>

            // How It Works
            <section id={PageSection::HowItWorks.id()} data-animate="" class="py-20 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionHeading
                        section=PageSection::HowItWorks
                        title="How VoyageAI Works"
                        subtitle="From dream to departure in three simple steps. No research, no overwhelm, no stress."
                    />
                    <div class="grid md:grid-cols-3 gap-12">
                        <StepCard
                            number="1"
                            badge="bg-purple-600"
                            title="Tell Us Your Vision"
                            description="Simply describe your ideal trip in natural language. \"Romantic weekend in Paris\" or \"Adventure trip to Costa Rica with kids\" - we understand it all."
                            delay=200
                        />
                        <StepCard
                            number="2"
                            badge="bg-violet-600"
                            title="AI Creates Your Itinerary"
                            description="Our AI analyzes millions of options, considers your preferences, and creates a perfect itinerary with flights, hotels, and activities in under 60 seconds."
                            delay=400
                        />
                        <StepCard
                            number="3"
                            badge="bg-indigo-600"
                            title="Book & Go"
                            description="Review, customize if needed, and book everything with one click. Your confirmations, boarding passes, and trip details arrive instantly."
                            delay=600
                        />
                    </div>
                </div>
            </section>

            // Testimonials
            <section id={PageSection::Testimonials.id()} data-animate="" class="py-20 bg-gray-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionHeading
                        section=PageSection::Testimonials
                        title="What Our Travelers Say"
                        subtitle="Join thousands of satisfied travelers who've discovered the future of trip planning."
                    />
                    <div class="grid md:grid-cols-3 gap-8">
                        <TestimonialCard
                            quote="VoyageAI planned our entire European honeymoon in 2 minutes. Every restaurant, hotel, and activity was absolutely perfect. I can't imagine planning travel any other way now."
                            author="Sarah Mitchell"
                            role="Marketing Director, San Francisco"
                            initials="SM"
                            avatar="bg-purple-100 text-purple-600"
                            delay=200
                        />
                        <TestimonialCard
                            quote="As a busy CEO, I need travel planning to be effortless. VoyageAI saved me 15+ hours and found deals I never would have discovered. The ROI is incredible."
                            author="David Rodriguez"
                            role="CEO, Austin Tech Startup"
                            initials="DR"
                            avatar="bg-violet-100 text-violet-600"
                            delay=400
                        />
                        <TestimonialCard
                            quote="Planning family trips with three kids used to be a nightmare. VoyageAI found kid-friendly activities I never knew existed and hotels with perfect amenities. Game changer!"
                            author="Jennifer Chen"
                            role="Mother of 3, Denver"
                            initials="JC"
                            avatar="bg-indigo-100 text-indigo-600"
                            delay=600
                        />
                    </div>
                </div>
            </section>

            // CTA Section
            <section
                id={PageSection::Cta.id()}
                data-animate=""
                class="py-20 bg-gradient-to-br from-purple-600 to-violet-800"
            >
                <div class=move || format!(
                    "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center transition-all duration-1000 {}",
                    reveal.class(PageSection::Cta, 0)
                )>
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                        "Ready to Transform How You Travel?"
                    </h2>
                    <p class="text-xl text-purple-100 mb-8 max-w-2xl mx-auto">
                        "Join 50,000+ travelers who've discovered the future of trip planning. "
                        "Start your free trial today."
                    </p>
                    <button class="bg-white text-purple-600 px-10 py-4 rounded-xl text-xl font-bold hover:bg-gray-50 transition-all duration-300 inline-flex items-center hover:scale-105 hover:shadow-xl transform active:scale-95 group">
                        "Start Free 7-Day Trial"
                        <ChevronRightIcon size="h-6 w-6"/>
                    </button>
                    <p class="text-purple-100 text-sm mt-4">
                        "No credit card required • Cancel anytime • Full refund guarantee"
                    </p>
                </div>
            </section>
        </div>
    }
}
